//! Statically constructed demo content: the revenue breakdown for a
//! three-app mobile portfolio, plus every pre-formatted string shown by the
//! reference panels. All values here are display copy; nothing is recomputed
//! from children at runtime.

use crate::model::{MetricNode, Palette};
use crate::state::ExpansionSet;
use crate::widgets::{GlossaryEntry, GlossarySection};

pub const TITLE: &str = "Mobile Publishing Metric Tree";
pub const SUBTITLE: &str = "CAS Mediation · Ad Monetization · UA";
pub const HINT: &str = "Click a node to drill into its breakdown";
pub const GROWTH_HEADING: &str = "Key MRR growth levers";

pub const LEGEND: [(Palette, &str); 6] = [
    (Palette::Blue, "MRR (NSM)"),
    (Palette::Purple, "Apps"),
    (Palette::Green, "Ad Revenue"),
    (Palette::Red, "UA Cost"),
    (Palette::Teal, "DAU"),
    (Palette::Amber, "ARPDAU"),
];

pub const KEY_FORMULAS: [(&str, &str); 4] = [
    ("MRR", "Σ(Ad Revenue - UA Cost)"),
    ("Ad Revenue", "DAU × ARPDAU × 30"),
    ("ARPDAU", "Impressions × eCPM / 1000"),
    ("ROAS", "LTV / CPI"),
];

pub const MEDIATION_STATS: [(&str, &str); 4] = [
    ("Fill Rate", "98.2%"),
    ("Avg eCPM", "$5.12"),
    ("Waterfall Win %", "67%"),
    ("Bidding Win %", "33%"),
];

pub const AD_FORMAT_SPLIT: [(&str, &str); 4] = [
    ("Interstitial", "45% rev"),
    ("Rewarded Video", "38% rev"),
    ("Banner", "12% rev"),
    ("App Open", "5% rev"),
];

pub const UA_CHANNELS: [(&str, &str); 4] = [
    ("Unity Ads", "35%"),
    ("Meta", "28%"),
    ("Google Ads", "22%"),
    ("Organic + ASO", "15%"),
];

pub const GROWTH_NOTES: [(&str, &str, Palette); 4] = [
    (
        "↑ ARPDAU:",
        "waterfall optimization, placement A/B tests, GEO segmentation",
        Palette::Green,
    ),
    (
        "↑ DAU:",
        "retention gains through LiveOps and content updates",
        Palette::Teal,
    ),
    (
        "↓ CPI:",
        "creative iteration, lookalike audiences, new traffic sources",
        Palette::Pink,
    ),
    (
        "↑ LTV/CPI:",
        "ROAS targeting, cohort analysis, payback optimization",
        Palette::Amber,
    ),
];

/// Nodes expanded when the dashboard first opens: the root and the three
/// app branches, one level of detail each.
pub fn initial_expansion() -> ExpansionSet {
    ["mrr", "app1", "app2", "app3"].into_iter().collect()
}

/// The full revenue tree. Built once at load time; ids are unique by
/// construction and checked again by `MetricNode::validate` before the
/// window opens.
pub fn revenue_tree() -> MetricNode {
    MetricNode::new("mrr", "MRR", "$850K", Palette::Blue)
        .subtitle("Monthly Recurring Revenue")
        .change("+22% MoM")
        .formula("Σ (App Revenue - UA Cost)")
        .children(vec![
            MetricNode::new("app1", "Puzzle Game", "$320K", Palette::Purple)
                .subtitle("Casual")
                .change("+15%")
                .formula("Ad Rev - UA Cost")
                .children(vec![
                    MetricNode::new("ad_revenue_1", "Ad Revenue", "$480K", Palette::Green)
                        .change("+18%")
                        .formula("DAU × ARPDAU")
                        .children(vec![
                            MetricNode::new("dau_1", "DAU", "890K", Palette::Teal)
                                .change("+12%")
                                .children(vec![
                                    MetricNode::new(
                                        "new_users_1",
                                        "New Users",
                                        "45K/day",
                                        Palette::Cyan,
                                    )
                                    .change("+8%"),
                                    MetricNode::new(
                                        "retention_1",
                                        "D7 Retention",
                                        "28%",
                                        Palette::Cyan,
                                    )
                                    .change("+2%"),
                                ]),
                            MetricNode::new("arpdau_1", "ARPDAU", "$0.054", Palette::Amber)
                                .change("+5%")
                                .children(vec![
                                    MetricNode::new(
                                        "impressions_1",
                                        "Impr/DAU",
                                        "12.4",
                                        Palette::Orange,
                                    )
                                    .change("+3%"),
                                    MetricNode::new("ecpm_1", "eCPM", "$4.35", Palette::Orange)
                                        .change("+2%"),
                                ]),
                        ]),
                    MetricNode::new("ua_cost_1", "UA Cost", "$160K", Palette::Red)
                        .change("+22%")
                        .formula("Installs × CPI")
                        .children(vec![
                            MetricNode::new("installs_1", "Installs", "1.4M", Palette::Pink)
                                .change("+18%"),
                            MetricNode::new("cpi_1", "CPI", "$0.11", Palette::Pink).change("+3%"),
                        ]),
                ]),
            MetricNode::new("app2", "Idle Tycoon", "$280K", Palette::Indigo)
                .subtitle("Idle/Clicker")
                .change("+28%")
                .formula("Ad Rev - UA Cost")
                .children(vec![
                    MetricNode::new("ad_revenue_2", "Ad Revenue", "$390K", Palette::Green)
                        .change("+25%")
                        .formula("DAU × ARPDAU")
                        .children(vec![
                            MetricNode::new("dau_2", "DAU", "520K", Palette::Teal).change("+20%"),
                            MetricNode::new("arpdau_2", "ARPDAU", "$0.075", Palette::Amber)
                                .change("+4%"),
                        ]),
                    MetricNode::new("ua_cost_2", "UA Cost", "$110K", Palette::Red).change("+18%"),
                ]),
            MetricNode::new("app3", "Word Master", "$250K", Palette::Teal)
                .subtitle("Word Game")
                .change("+18%")
                .formula("Ad Rev - UA Cost")
                .children(vec![
                    MetricNode::new("ad_revenue_3", "Ad Revenue", "$310K", Palette::Green)
                        .change("+15%")
                        .children(vec![
                            MetricNode::new("dau_3", "DAU", "380K", Palette::Teal).change("+10%"),
                            MetricNode::new("arpdau_3", "ARPDAU", "$0.082", Palette::Amber)
                                .change("+5%"),
                        ]),
                    MetricNode::new("ua_cost_3", "UA Cost", "$60K", Palette::Red).change("+8%"),
                ]),
        ])
}

/// Glossary copy for every metric that appears somewhere in the tree or the
/// deep-dive cards.
pub fn glossary() -> Vec<GlossarySection<'static>> {
    vec![
        GlossarySection::new("North Star Metric", Palette::Blue).entry(
            GlossaryEntry::new(
                "MRR (Monthly Recurring Revenue)",
                "Monthly income across the app portfolio net of acquisition spend. \
                 The publisher's primary business metric, summed over all apps.",
                Palette::Blue,
            )
            .formula("Σ(Ad Revenue - UA Cost)"),
        ),
        GlossarySection::new("Revenue Metrics", Palette::Green)
            .entry(
                GlossaryEntry::new(
                    "Ad Revenue",
                    "Total in-app advertising income for the period, summed over every \
                     format (interstitial, rewarded, banner, app open).",
                    Palette::Green,
                )
                .formula("DAU × ARPDAU × Days"),
            )
            .entry(
                GlossaryEntry::new(
                    "ARPDAU (Average Revenue Per Daily Active User)",
                    "Average daily revenue per active user; the key monetization metric. \
                     Driven by impression volume and advertiser bids.",
                    Palette::Amber,
                )
                .formula("Impressions/DAU × eCPM / 1000"),
            )
            .entry(
                GlossaryEntry::new(
                    "eCPM (Effective Cost Per Mille)",
                    "Effective revenue per thousand impressions. Varies with GEO, ad \
                     format, audience quality and mediation setup.",
                    Palette::Orange,
                )
                .formula("(Revenue / Impressions) × 1000"),
            )
            .entry(GlossaryEntry::new(
                "Impressions / DAU",
                "Average ad impressions per user per day. A function of session depth, \
                 placement count and frequency capping; tuned through UX work and A/B \
                 tests.",
                Palette::Orange,
            ))
            .entry(
                GlossaryEntry::new(
                    "LTV (Lifetime Value)",
                    "Projected total revenue per user over their whole time in the app, \
                     from retention cohort curves or daily revenue times expected \
                     lifetime.",
                    Palette::Amber,
                )
                .formula("ARPDAU × Lifetime Days"),
            ),
        GlossarySection::new("User Metrics", Palette::Teal)
            .entry(
                GlossaryEntry::new(
                    "DAU (Daily Active Users)",
                    "Unique users opening the app each day; the base measure of an \
                     app's scale.",
                    Palette::Teal,
                )
                .formula("New Users + Retained Users"),
            )
            .entry(GlossaryEntry::new(
                "New Users (Installs)",
                "Daily installs, driven by UA budget, organic traffic and ASO. \
                 Sources: paid networks (Unity, Meta, Google), organic, cross-promo.",
                Palette::Cyan,
            ))
            .entry(GlossaryEntry::new(
                "Retention (D1, D7, D30)",
                "Share of users returning N days after install. Healthy casual-game \
                 benchmarks: D1 40-50%, D7 20-30%, D30 10-15%. The main signal of \
                 product quality and of how well UA traffic matches the product.",
                Palette::Cyan,
            )),
        GlossarySection::new("User Acquisition Metrics", Palette::Pink)
            .entry(
                GlossaryEntry::new(
                    "UA Cost (User Acquisition Cost)",
                    "Total acquisition spend across every paid channel for the period.",
                    Palette::Red,
                )
                .formula("Installs × CPI"),
            )
            .entry(GlossaryEntry::new(
                "CPI (Cost Per Install)",
                "Average cost of one install. Moves with GEO, creative quality, niche \
                 competition and targeting. Casual range: $0.05-0.30 in T3 GEOs, \
                 $0.50-2.00 in T1.",
                Palette::Pink,
            ))
            .entry(
                GlossaryEntry::new(
                    "ROAS (Return On Ad Spend)",
                    "Return on UA investment; a campaign above 100% is profitable.",
                    Palette::Pink,
                )
                .formula("LTV / CPI × 100%"),
            )
            .entry(GlossaryEntry::new(
                "Payback Period",
                "Days until a cohort's revenue covers its acquisition cost. Healthy \
                 range: 7-30 days, read off where the LTV curve crosses CPI.",
                Palette::Pink,
            )),
        GlossarySection::new("Mediation Metrics (CAS)", Palette::Purple)
            .entry(
                GlossaryEntry::new(
                    "Fill Rate",
                    "Share of ad requests answered with an ad. 95-99% is good; depends \
                     on the number of connected networks and the waterfall setup.",
                    Palette::Purple,
                )
                .formula("(Filled Requests / Total Requests) × 100%"),
            )
            .entry(GlossaryEntry::new(
                "Waterfall",
                "Sequential requests to ad networks in descending expected-eCPM order \
                 until one fills the slot. More predictable than bidding, usually less \
                 efficient.",
                Palette::Purple,
            ))
            .entry(GlossaryEntry::new(
                "In-App Bidding",
                "Real-time auction across networks; the highest bid wins. Lifts eCPM \
                 10-30% over a pure waterfall through competition.",
                Palette::Purple,
            ))
            .entry(
                GlossaryEntry::new(
                    "Show Rate",
                    "Share of loaded ads actually shown. A low value points at UX \
                     problems or over-eager preloading.",
                    Palette::Purple,
                )
                .formula("(Shown Ads / Loaded Ads) × 100%"),
            ),
        GlossarySection::new("Ad Formats", Palette::Indigo)
            .entry(GlossaryEntry::new(
                "Interstitial",
                "Full-screen ad between screens or levels. High eCPM ($3-15) but hurts \
                 retention when overused; best after a completed level or round.",
                Palette::Indigo,
            ))
            .entry(GlossaryEntry::new(
                "Rewarded Video",
                "Opt-in video in exchange for an in-game reward. The highest eCPM \
                 ($5-25) and the best UX; hinges on pricing the reward correctly.",
                Palette::Indigo,
            ))
            .entry(GlossaryEntry::new(
                "Banner",
                "Small always-on placement, usually at the bottom of the screen. Low \
                 eCPM ($0.10-1) but steady income with no gameplay impact.",
                Palette::Indigo,
            ))
            .entry(GlossaryEntry::new(
                "App Open Ads",
                "Full-screen ad at launch or on return to the app. Mid eCPM ($2-8); \
                 best limited to cold starts and long absences.",
                Palette::Indigo,
            )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tree_is_well_formed() {
        assert_eq!(revenue_tree().validate(), Ok(()));
        assert_eq!(revenue_tree().count(), 22);
    }

    #[test]
    fn initial_expansion_ids_all_exist() {
        let tree = revenue_tree();
        for id in ["mrr", "app1", "app2", "app3"] {
            assert!(tree.find(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn legend_names_colors_used_by_the_tree() {
        let tree = revenue_tree();
        let mut colors = Vec::new();
        let mut stack = vec![&tree];
        while let Some(node) = stack.pop() {
            colors.push(node.color);
            stack.extend(node.children.iter());
        }
        for (palette, _) in LEGEND {
            assert!(colors.contains(&palette));
        }
    }
}
