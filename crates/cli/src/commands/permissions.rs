//! assetdesk permissions command

use clap::Args;
use rbac::PermissionSet;

use crate::output;
use crate::Context;

/// Show the permission set derived for the acting user
#[derive(Debug, Args)]
pub struct PermissionsCommand {}

impl PermissionsCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let permissions = PermissionSet::for_profile(ctx.profile.as_ref());

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&permissions)?);
            return Ok(());
        }

        println!("{}", heading(ctx));
        print!("{}", output::render_permissions(&permissions));
        Ok(())
    }
}

fn heading(ctx: &Context) -> String {
    match &ctx.profile {
        Some(profile) if !profile.label().is_empty() => {
            format!("Permissions for {} (role: {})", profile.label(), profile.role)
        }
        Some(profile) => format!("Permissions for role: {}", profile.role),
        None => "Permissions when signed out:".to_string(),
    }
}
