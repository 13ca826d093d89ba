//! Webhook relay command

use chatter::logging::Diagnostics;
use chatter::server;

use super::Invocation;

/// Run the relay, binding `bind` or the configured address
pub fn serve(invocation: &Invocation, bind: Option<String>) -> anyhow::Result<()> {
    let file = invocation.config_file()?;
    let addr = bind.unwrap_or(file.server.bind);

    println!("Starting chatter relay on {addr}");
    println!("Press Ctrl+C to stop");

    server::serve(&addr, &Diagnostics::global())
}
