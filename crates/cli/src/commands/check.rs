//! assetdesk check command

use clap::Args;
use rbac::{views, Control, PermissionSet};

use crate::output;
use crate::Context;

/// Check whether the acting user may use a single control
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Control name (e.g. delete-asset, audit-log-table)
    pub control: String,
}

impl CheckCommand {
    /// `Ok` when the control is visible, otherwise the reason it is hidden
    pub fn check(&self, ctx: &Context) -> shared::Result<Control> {
        let control: Control = self.control.parse()?;
        let permissions = PermissionSet::for_profile(ctx.profile.as_ref());
        let role = ctx.profile.as_ref().map(|p| p.role.as_str()).unwrap_or("none");
        views::check_control(control, &permissions, role)?;
        Ok(control)
    }

    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let result = match self.check(ctx) {
            Err(err @ shared::AssetDeskError::UnknownControl(_)) => return Err(err.into()),
            result => result,
        };

        if ctx.json {
            let value = match &result {
                Ok(control) => serde_json::json!({ "control": control, "visible": true }),
                Err(err) => serde_json::json!({
                    "control": self.control,
                    "visible": false,
                    "reason": err.to_string(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            match &result {
                Ok(control) => println!("{} {} is visible", output::mark(true), control),
                Err(err) => println!("{} {}", output::mark(false), err),
            }
        }
        Ok(())
    }
}
