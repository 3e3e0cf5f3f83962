//! URL encoding/decoding utilities

/// Encodes a string using URL encoding
///
/// # Arguments
/// * `input` - The string to encode
///
/// # Returns
/// * String containing the URL-encoded input
///
/// # Examples
/// ```
/// use deeplinker::utils::url::url_encode;
///
/// let encoded = url_encode("https://example.com/item");
/// assert_eq!(encoded, "https%3A%2F%2Fexample.com%2Fitem");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decodes a URL-encoded string
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
///
/// # Examples
/// ```
/// use deeplinker::utils::url::url_decode;
///
/// let decoded = url_decode("tmall%3A%2F%2Fpage.tm");
/// assert_eq!(decoded, "tmall://page.tm");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}
