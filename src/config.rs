//! Command line configuration of the portal server

use std::net::SocketAddr;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the server listens on
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    pub ip: String,
    /// Listening port, 0 to use the address given by the dioxus CLI
    #[arg(long, default_value_t = 0)]
    pub port: u16,
    /// Print the route table as JSON and exit
    #[arg(long)]
    pub print_routes: bool,
}

impl Args {
    /// Socket address to bind, falling back to the dioxus CLI address when no
    /// port was given
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        if self.port == 0 {
            return Ok(dioxus_cli_config::fullstack_address_or_localhost());
        }
        format!("{}:{}", self.ip, self.port).parse()
    }
}
