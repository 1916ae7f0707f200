use crate::calc::FamilyHint;

#[derive(clap::Parser, Debug)]
#[command(
    name = "ipcalc",
    version,
    about = "Calculate IP subnet information for IPv4 or IPv6. Defaults to IPv6 if no version flag is specified."
)]
pub struct Args {
    /// Specify IPv4 address calculation
    #[arg(short = '4', group = "family")]
    pub ipv4: bool,
    /// Specify IPv6 address calculation
    #[arg(short = '6', group = "family")]
    pub ipv6: bool,
    /// Print without colors
    #[arg(long)]
    pub no_color: bool,
    /// More log output on stderr, repeat for more (ignored when RUST_LOG is set)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// The IP address and prefix in CIDR notation (e.g., 192.168.1.0/24 or 2001:db8::/32)
    pub network_address: String,
}

impl Args {
    pub fn family_hint(&self) -> FamilyHint {
        match (self.ipv4, self.ipv6) {
            (true, _) => FamilyHint::V4,
            (_, true) => FamilyHint::V6,
            _ => FamilyHint::Unspecified,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
