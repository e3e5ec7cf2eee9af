//! Text rendering for permission sets, guards and screens

use console::style;
use rbac::{Capability, ControlState, GuardDecision, PermissionSet};
use shared::Role;

/// Colored ✓ or ✗
pub fn mark(granted: bool) -> String {
    if granted {
        style("✓").green().to_string()
    } else {
        style("✗").red().to_string()
    }
}

/// One line per capability, then the role-equality flags
pub fn render_permissions(permissions: &PermissionSet) -> String {
    let mut out = String::new();
    for capability in Capability::all() {
        out.push_str(&format!("  {} {}\n", mark(permissions.allows(*capability)), capability));
    }
    out.push_str(&format!(
        "  isAdmin={} isFacilitair={} isUser={}\n",
        permissions.is_admin, permissions.is_facilitair, permissions.is_user
    ));
    out
}

/// Capability x role grid
pub fn render_matrix() -> String {
    let width = Capability::all()
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{:width$}", "", width = width);
    for role in Role::all() {
        out.push_str(&format!(" | {}", role));
    }
    out.push('\n');

    for capability in Capability::all() {
        out.push_str(&format!("{:width$}", capability.name(), width = width));
        for role in Role::all() {
            let cell = if capability.is_granted_to(*role) { "✓" } else { "-" };
            out.push_str(&format!(" | {:^w$}", cell, w = role.as_str().len()));
        }
        out.push('\n');
    }
    out
}

pub fn render_decision(decision: &GuardDecision) -> String {
    match decision {
        GuardDecision::Protected => format!("{} protected content", mark(true)),
        GuardDecision::Fallback(reason) => format!("{} fallback ({})", mark(false), reason),
    }
}

pub fn render_controls(states: &[ControlState]) -> String {
    states
        .iter()
        .map(|state| {
            format!("  {} {:<24} {}\n", mark(state.visible), state.control, state.reason)
        })
        .collect()
}
