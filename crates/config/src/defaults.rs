pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_http_port() -> u16 {
    8080
}
