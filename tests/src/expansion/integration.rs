#![cfg(test)]
use ipexpand_core::{ParseError, Target, parse_dashed};
use std::net::Ipv4Addr;

fn expand(expression: &str) -> Vec<Ipv4Addr> {
    parse_dashed(expression)
        .unwrap_or_else(|e| panic!("{expression} failed: {e}"))
        .collect()
}

#[test]
fn dashed_last_octet_range() {
    assert_eq!(
        expand("10.0.0.1-2"),
        vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)]
    );
}

#[test]
fn dashed_inner_octet_range() {
    assert_eq!(
        expand("10.0.1-2.1"),
        vec![Ipv4Addr::new(10, 0, 1, 1), Ipv4Addr::new(10, 0, 2, 1)]
    );
}

#[test]
fn dashed_open_bounds() {
    let ips = expand("-1.0.-.1");

    assert_eq!(ips.len(), 512);
    assert_eq!(ips[0], Ipv4Addr::new(0, 0, 0, 1));
    assert_eq!(ips[255], Ipv4Addr::new(0, 0, 255, 1));
    assert_eq!(ips[256], Ipv4Addr::new(1, 0, 0, 1));
    assert!(ips.contains(&Ipv4Addr::new(1, 0, 255, 1)));
}

#[test]
fn dashed_omitted_high() {
    assert_eq!(
        expand("10.0.1-2.254-"),
        vec![
            Ipv4Addr::new(10, 0, 1, 254),
            Ipv4Addr::new(10, 0, 1, 255),
            Ipv4Addr::new(10, 0, 2, 254),
            Ipv4Addr::new(10, 0, 2, 255),
        ]
    );
}

#[test]
fn dashed_wrapping_range() {
    let last: Vec<u8> = expand("10.0.0.254-2").iter().map(|ip| ip.octets()[3]).collect();
    assert_eq!(last, vec![254, 255, 0, 1, 2]);

    let ips = expand("10.255-0.0.0");
    assert_eq!(
        ips,
        vec![Ipv4Addr::new(10, 255, 0, 0), Ipv4Addr::new(10, 0, 0, 0)]
    );
}

#[test]
fn dashed_range_lengths() {
    for (low, high) in [(0u8, 0u8), (3, 9), (0, 255), (200, 10), (255, 254)] {
        let expression = format!("1.1.1.{low}-{high}");
        let expected = if low <= high {
            u64::from(high - low) + 1
        } else {
            (255 - u64::from(low)) + u64::from(high) + 2
        };
        assert_eq!(parse_dashed(&expression).unwrap().total(), expected, "{expression}");
    }
}

#[test]
fn dashed_full_space_is_lazy() {
    let mut ips = parse_dashed("-.-.-.-").unwrap();
    assert_eq!(ips.total(), 1 << 32);
    assert_eq!(ips.next(), Some(Ipv4Addr::new(0, 0, 0, 0)));
    assert_eq!(ips.nth(255), Some(Ipv4Addr::new(0, 0, 1, 0)));
}

#[test]
fn dashed_rejects_malformed_input() {
    let inputs = [
        "",
        "10.0.1",
        "10.0.1-2.255.30",
        "10.0.1-2.255-f",
        "10.0.0.270",
        "10.0.0.0.",
        "--.0.0.1",
        "-...1",
        "1f.0.0.0.",
        "10-1f.0.0.0.",
    ];
    for input in inputs {
        assert!(parse_dashed(input).is_err(), "{input:?} should fail");
    }
}

#[test]
fn dashed_error_kinds() {
    assert!(matches!(
        parse_dashed("10.0.1"),
        Err(ParseError::Truncated { .. })
    ));
    assert!(matches!(
        parse_dashed("10.0.1-2.255.30"),
        Err(ParseError::ExcessInput { .. })
    ));
    assert!(matches!(
        parse_dashed("10.0.0.270"),
        Err(ParseError::Overflow { .. })
    ));
    assert!(matches!(
        parse_dashed("10.0.0.0."),
        Err(ParseError::DanglingDot { .. })
    ));
    assert!(matches!(
        parse_dashed("--.0.0.1"),
        Err(ParseError::Syntax { found: '-', index: 1 })
    ));
}

#[test]
fn dashed_parse_is_repeatable() {
    let first = expand("10-11.0.1-2.254-");
    let second = expand("10-11.0.1-2.254-");
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
}

#[test]
fn target_cidr_and_dashed_agree() {
    let cidr: Target = "172.16.4.0/23".parse().unwrap();
    let dashed: Target = "172.16.4-5.-".parse().unwrap();

    assert_eq!(cidr.len(), 512);
    assert!(cidr.addresses().eq(dashed.addresses()));
}
