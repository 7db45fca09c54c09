//! Application configuration
//!
//! UI constants shared by client and server, plus the server settings parsed
//! from the command line and environment.

use crate::shared::hooks::ColorScheme;

/// Id of the host element the web renderer attaches to
pub const MOUNT_POINT_ID: &str = "main";

/// The only option the theme context is configured with
pub const DEFAULT_COLOR_SCHEME: ColorScheme = ColorScheme::Dark;

/// Version badge shown in the sidebar header
pub const VERSION_BADGE: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[cfg(not(target_arch = "wasm32"))]
pub use server::ServerConfig;

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use clap::Parser;
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    /// Settings for the standalone API server
    #[derive(Debug, Clone, Parser)]
    #[command(name = "server", about = "CRM hub booking API server", version)]
    pub struct ServerConfig {
        /// Address to bind
        #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        pub host: IpAddr,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3001)]
        pub port: u16,
    }

    impl ServerConfig {
        pub fn socket_addr(&self) -> SocketAddr {
            SocketAddr::new(self.host, self.port)
        }
    }
}
