/// Log tags identify the subsystem a message comes from
///
/// The debug key is what `--debug-<key>` matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Fleet,
    Poller,
    Webserver,
    /// Messages forwarded from third-party crates through the `log` facade
    Http,
}

impl LogTag {
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Fleet => "fleet",
            LogTag::Poller => "poller",
            LogTag::Webserver => "webserver",
            LogTag::Http => "http",
        }
        .to_string()
    }

    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
