use dioxus::prelude::*;

use crate::{
    domain::{
        evaluate_pricing, parse_amount, parse_target_pct, parse_units, CalculatorInputs,
        ChannelPricing, CostInputs, TARGET_MARGIN_MAX, TARGET_MARGIN_MIN,
    },
    ui::{
        components::{
            number_input::NumberInput,
            stat::Stat,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{BTN_PRIMARY, LABEL, PANEL, PANEL_TITLE},
    },
    util::{
        export::write_export,
        format::{format_money, format_pct},
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let defaults = CalculatorInputs::default();
    let mut cogs_input = use_signal(|| defaults.costs.cogs.to_string());
    let mut packaging_input = use_signal(|| defaults.costs.packaging.to_string());
    let mut ship_fulfill_input = use_signal(|| defaults.costs.ship_fulfill.to_string());
    let mut overhead_input = use_signal(|| defaults.costs.overhead.to_string());
    let mut units_input = use_signal(|| defaults.costs.units_per_case.to_string());
    let mut msrp_input = use_signal(|| defaults.retail.price.to_string());
    let mut retail_fee_input = use_signal(|| defaults.retail.fee_pct.to_string());
    let mut wholesale_price_input = use_signal(|| defaults.wholesale.price.to_string());
    let mut wholesale_fee_input = use_signal(|| defaults.wholesale.fee_pct.to_string());
    let mut target_margin_input = use_signal(|| defaults.target_margin_pct.to_string());

    let inputs = current_inputs(
        &cogs_input(),
        &packaging_input(),
        &ship_fulfill_input(),
        &overhead_input(),
        &units_input(),
        &msrp_input(),
        &retail_fee_input(),
        &wholesale_price_input(),
        &wholesale_fee_input(),
        &target_margin_input(),
    );
    let summary = evaluate_pricing(&inputs);

    let unit_cost = format_money(summary.unit_cost);
    let retail_margin = format_pct(summary.retail.margin_pct);
    let wholesale_margin = format_pct(summary.wholesale.margin_pct);
    let retail_unit_profit = format_money(summary.retail.unit_profit);
    let wholesale_unit_profit = format_money(summary.wholesale.unit_profit);
    let case_profit_retail = format_money(summary.retail.case_profit);
    let case_profit_wholesale = format_money(summary.wholesale.case_profit);
    let target_label = format_pct(inputs.target_margin_pct);
    let required_msrp = match summary.required_msrp {
        Some(value) => format_money(value),
        None => "—".to_string(),
    };

    let on_export = {
        let toasts = toasts.clone();
        move |_| {
            let inputs = current_inputs(
                &cogs_input(),
                &packaging_input(),
                &ship_fulfill_input(),
                &overhead_input(),
                &units_input(),
                &msrp_input(),
                &retail_fee_input(),
                &wholesale_price_input(),
                &wholesale_fee_input(),
                &target_margin_input(),
            );
            let summary = evaluate_pricing(&inputs);
            match write_export(&inputs, &summary) {
                Ok(path) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Exported scenario to {}", path.display()),
                ),
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, format!("Export failed: {err}"))
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                p { class: "text-sm text-slate-300",
                    "For indie CPG founders. Plug in your costs → instant unit economics, margins, and case profit."
                }
                ul { class: "mt-3 list-disc list-inside space-y-1 text-sm text-slate-400",
                    li { "Who it’s for: coffee, snacks, beverages, functional food" }
                    li { "What it does: retail & wholesale margins, case profit, MSRP needed for a target margin" }
                }
            }

            div { class: "grid gap-5 md:grid-cols-3",
                div { class: "space-y-5 md:col-span-2",
                    section { class: "{PANEL}",
                        h2 { class: "{PANEL_TITLE}", "Costs per Unit" }
                        div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                            NumberInput {
                                label: "COGS (ingredients)",
                                hint: Some("Raw ingredients per unit. Increases unit cost and lowers margins."),
                                prefix: Some("$"),
                                value: cogs_input(),
                                oninput: move |raw| cogs_input.set(raw),
                            }
                            NumberInput {
                                label: "Packaging",
                                hint: Some("Bags, bottles, labels, wrappers per unit. Raises unit cost and reduces margins."),
                                prefix: Some("$"),
                                value: packaging_input(),
                                oninput: move |raw| packaging_input.set(raw),
                            }
                            NumberInput {
                                label: "Ship / Fulfillment",
                                hint: Some("Pick/pack labor, packaging, postage subsidized per unit."),
                                prefix: Some("$"),
                                value: ship_fulfill_input(),
                                oninput: move |raw| ship_fulfill_input.set(raw),
                            }
                            NumberInput {
                                label: "Overhead (allocated)",
                                hint: Some("Rent, utilities, labor, software per unit. Shows true margin impact."),
                                prefix: Some("$"),
                                value: overhead_input(),
                                oninput: move |raw| overhead_input.set(raw),
                            }
                            NumberInput {
                                label: "Units per Case",
                                hint: Some("Sellable units per wholesale case. Changes case profit only."),
                                step: "1",
                                value: units_input(),
                                oninput: move |raw| units_input.set(raw),
                            }
                        }
                    }

                    section { class: "{PANEL}",
                        h2 { class: "{PANEL_TITLE}", "Channel & Pricing" }
                        div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                            NumberInput {
                                label: "MSRP (Retail Price)",
                                hint: Some("Sticker price. Drives retail margin & profit."),
                                prefix: Some("$"),
                                value: msrp_input(),
                                oninput: move |raw| msrp_input.set(raw),
                            }
                            NumberInput {
                                label: "Retail Fees (%)",
                                hint: Some("Marketplace + payment processing fees."),
                                suffix: Some("%"),
                                step: "0.25",
                                value: retail_fee_input(),
                                oninput: move |raw| retail_fee_input.set(raw),
                            }
                            NumberInput {
                                label: "Wholesale Price",
                                hint: Some("Your per-unit price to retailers/distributors."),
                                prefix: Some("$"),
                                value: wholesale_price_input(),
                                oninput: move |raw| wholesale_price_input.set(raw),
                            }
                            NumberInput {
                                label: "Wholesale Fees (%)",
                                hint: Some("Portal/processing fees on wholesale."),
                                suffix: Some("%"),
                                step: "0.25",
                                value: wholesale_fee_input(),
                                oninput: move |raw| wholesale_fee_input.set(raw),
                            }
                        }
                    }

                    section { class: "{PANEL}",
                        h2 { class: "{PANEL_TITLE}", "Target Margin → Required MSRP" }
                        div { class: "mt-4 space-y-3",
                            div { class: "flex items-center gap-3",
                                label { class: "{LABEL}", "Target Margin" }
                                input {
                                    r#type: "range",
                                    min: "{TARGET_MARGIN_MIN}",
                                    max: "{TARGET_MARGIN_MAX}",
                                    step: "1",
                                    class: "w-full accent-emerald-500",
                                    value: target_margin_input(),
                                    oninput: move |evt| target_margin_input.set(evt.value()),
                                }
                                span { class: "w-14 text-right text-sm font-medium text-slate-200",
                                    "{target_label}"
                                }
                            }
                            p { class: "text-sm text-slate-400", "Required MSRP (accounts for retail fees):" }
                            p { class: "text-2xl font-semibold text-emerald-300", "{required_msrp}" }
                        }
                    }
                }

                div { class: "space-y-5",
                    section { class: "{PANEL}",
                        h2 { class: "{PANEL_TITLE}", "Live Stats" }
                        div { class: "mt-4 grid grid-cols-1 gap-4",
                            Stat { label: "Unit Cost (before fees)", value: unit_cost, emphasize: true }
                            div { class: "grid grid-cols-2 gap-4 pt-2",
                                Stat { label: "Retail Margin", value: retail_margin }
                                Stat { label: "Wholesale Margin", value: wholesale_margin }
                                Stat { label: "Retail Unit Profit", value: retail_unit_profit }
                                Stat { label: "Wholesale Unit Profit", value: wholesale_unit_profit }
                                Stat { label: "Case Profit (Retail)", value: case_profit_retail }
                                Stat { label: "Case Profit (Wholesale)", value: case_profit_wholesale }
                            }
                        }
                    }

                    section { class: "{PANEL}",
                        div { class: "flex items-center justify-between gap-3",
                            div {
                                p { class: "text-sm font-medium text-slate-200", "Export CSV" }
                                p { class: "text-xs text-slate-500",
                                    "Writes your inputs + computed results to your Downloads folder."
                                }
                            }
                            button { class: "{BTN_PRIMARY}", onclick: on_export, "Export" }
                        }
                    }
                }
            }
        }
    }
}

fn current_inputs(
    cogs: &str,
    packaging: &str,
    ship_fulfill: &str,
    overhead: &str,
    units_per_case: &str,
    msrp: &str,
    retail_fee: &str,
    wholesale_price: &str,
    wholesale_fee: &str,
    target_margin: &str,
) -> CalculatorInputs {
    CalculatorInputs {
        costs: CostInputs {
            cogs: parse_amount(cogs),
            packaging: parse_amount(packaging),
            ship_fulfill: parse_amount(ship_fulfill),
            overhead: parse_amount(overhead),
            units_per_case: parse_units(units_per_case),
        },
        retail: ChannelPricing {
            price: parse_amount(msrp),
            fee_pct: parse_amount(retail_fee),
        },
        wholesale: ChannelPricing {
            price: parse_amount(wholesale_price),
            fee_pct: parse_amount(wholesale_fee),
        },
        target_margin_pct: parse_target_pct(target_margin),
    }
}
