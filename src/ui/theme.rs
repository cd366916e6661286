//! Shared Tailwind classes for the mint-on-slate look.

// ============================================
// PANELS
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";
pub const PANEL_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";

// ============================================
// FORM CONTROLS
// ============================================

pub const LABEL: &str = "text-xs font-semibold uppercase text-slate-500";

// ============================================
// BUTTONS
// ============================================

pub const BTN_PRIMARY: &str = "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-emerald-950 hover:bg-emerald-400";
