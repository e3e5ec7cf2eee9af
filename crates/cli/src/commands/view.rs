//! assetdesk view command

use clap::Args;
use rbac::{views, PermissionSet, Screen};

use crate::output;
use crate::Context;

/// Show which controls of a screen the acting user sees
#[derive(Debug, Args)]
pub struct ViewCommand {
    /// Screen name (header, assets, reservations, maintenance, notifications, audit-log)
    pub screen: String,
}

impl ViewCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let screen: Screen = self.screen.parse()?;
        let permissions = PermissionSet::for_profile(ctx.profile.as_ref());
        let states = views::controls_for(screen, &permissions);

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&states)?);
            return Ok(());
        }

        let reachable = permissions.allows(screen.entry_capability());
        println!(
            "Screen '{}' ({})",
            screen,
            if reachable { "accessible" } else { "not accessible" }
        );
        print!("{}", output::render_controls(&states));
        Ok(())
    }
}
