/// Supported target platforms
///
/// Selected once per batch request; determines which conversion rule applies
/// to every link in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Taobao,
    Alipay,
    Tmall,
    Jd,
    Pdd,
    Meituan,
    Xianyu,
}

impl Platform {
    /// Convert string to platform enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "taobao" => Some(Platform::Taobao),
            "alipay" => Some(Platform::Alipay),
            "tmall" => Some(Platform::Tmall),
            "jd" => Some(Platform::Jd),
            "pdd" => Some(Platform::Pdd),
            "meituan" => Some(Platform::Meituan),
            "xianyu" => Some(Platform::Xianyu),
            _ => None,
        }
    }

    /// String representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Taobao => "taobao",
            Platform::Alipay => "alipay",
            Platform::Tmall => "tmall",
            Platform::Jd => "jd",
            Platform::Pdd => "pdd",
            Platform::Meituan => "meituan",
            Platform::Xianyu => "xianyu",
        }
    }

    /// Whether this platform's converter is a pure string transform that
    /// never touches the network.
    pub fn is_pure(&self) -> bool {
        !matches!(self, Platform::Taobao | Platform::Alipay)
    }
}
