use colored::{Color, Colorize};
use num::BigUint;

use crate::calc::SubnetReport;
use crate::net::AddressFamily;

/// Inserts `,` between every group of three digits.
pub fn group_digits(value: &BigUint) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn paint(text: &str, color: bool, style: Option<Color>) -> String {
    match (color, style) {
        (false, _) => text.to_owned(),
        (true, Some(c)) => text.color(c).to_string(),
        (true, None) => text.bold().to_string(),
    }
}

/// Renders the fixed-label block printed for one network.
pub fn render(report: &SubnetReport, color: bool) -> String {
    let mut rows = vec![
        ("IP Version", report.version.to_string(), Color::Cyan),
        ("Network (CIDR)", report.network_cidr.clone(), Color::Green),
        ("Network Address", report.network_address.clone(), Color::Yellow),
    ];
    if report.family() == AddressFamily::V4 {
        rows.push(("Broadcast Address", report.last_address.clone(), Color::Magenta));
    }
    if let Some(first) = &report.first_usable {
        rows.push(("First usable Address", first.clone(), Color::Blue));
    }
    if let Some(last) = &report.last_usable {
        rows.push(("Last usable Address", last.clone(), Color::Blue));
    }
    rows.push((
        "Total Addresses",
        group_digits(&report.total_addresses),
        Color::Cyan,
    ));

    let width = rows.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0) + 4;

    let mut out = String::new();
    for (label, value, style) in rows {
        // pad before painting, escape codes would count towards the width
        let label = format!("{:<width$}", format!("  {label}:"));
        out.push_str(&paint(&label, color, None));
        out.push_str(&paint(&value, color, Some(style)));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{compute, FamilyHint};

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(&BigUint::from(1u32)), "1");
        assert_eq!(group_digits(&BigUint::from(256u32)), "256");
        assert_eq!(group_digits(&BigUint::from(4096u32)), "4,096");
        assert_eq!(group_digits(&BigUint::from(16777216u32)), "16,777,216");
        assert_eq!(
            group_digits(&"4835703278458516698824704".parse().unwrap()),
            "4,835,703,278,458,516,698,824,704"
        );
    }

    #[test]
    fn ipv4_block() {
        let report = compute("192.168.1.10/24", FamilyHint::V4).unwrap();
        assert_eq!(
            render(&report, false),
            "  IP Version:           4\n\
             \x20 Network (CIDR):       192.168.1.0/24\n\
             \x20 Network Address:      192.168.1.0\n\
             \x20 Broadcast Address:    192.168.1.255\n\
             \x20 First usable Address: 192.168.1.1\n\
             \x20 Last usable Address:  192.168.1.254\n\
             \x20 Total Addresses:      256\n"
        );
    }

    #[test]
    fn ipv6_block_has_no_broadcast_line() {
        let report = compute("2001:abc::abc/46", FamilyHint::Unspecified).unwrap();
        let text = render(&report, false);
        assert!(!text.contains("Broadcast"));
        assert_eq!(
            text.lines().last(),
            Some("  Total Addresses:      4,835,703,278,458,516,698,824,704")
        );
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn missing_usable_range_is_omitted() {
        let mut report = compute("10.0.0.0/8", FamilyHint::V4).unwrap();
        report.first_usable = None;
        report.last_usable = None;
        let text = render(&report, false);
        assert!(!text.contains("usable"));
        assert!(text.starts_with("  IP Version:        4\n"));
    }
}
