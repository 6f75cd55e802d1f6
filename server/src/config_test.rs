use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8081 ")), Ok(8081));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_defaults_to_all_interfaces() {
    assert_eq!(parse_bind(None), Ok(DEFAULT_BIND));
}

#[test]
fn parse_bind_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_bind(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(parse_bind(Some("::1")).is_ok_and(|addr| addr.is_loopback()));
}

#[test]
fn parse_bind_rejects_hostname() {
    assert_eq!(parse_bind(Some("localhost")), Err(ConfigError::InvalidBind("localhost".to_owned())));
}

#[test]
fn socket_addr_combines_bind_and_port() {
    let config = HostConfig { bind: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000 };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
    assert_eq!(HostConfig::default().socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn config_error_names_variable() {
    assert_eq!(ConfigError::InvalidPort("x".to_owned()).to_string(), "invalid PORT: x");
}
