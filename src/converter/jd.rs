//! JD conversion: the union-channel params blob.

use super::Outcome;

/// Build the JD union deep link. The embedded URL stays raw: the JD app
/// parses the params blob itself and expects an unencoded value. Never
/// fails.
pub fn convert(link: &str) -> Outcome {
    Outcome::Converted(format!(
        r#"openapp.jdmobile://virtual?params={{"category":"jump","sourcetype":"sourcetype_test","des":"m","url":"{}","unionsource":"awake","channel":"c463034d12227447a79d0fefaef3fa18","union_open":"union_cps"}}"#,
        link
    ))
}
