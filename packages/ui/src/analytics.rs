use api::{CampaignPerformance, DailyDonations};
use dioxus::prelude::*;

use crate::admin_stats::{Fetch, NO_USER};
use crate::auth::{use_auth, use_config};
use crate::charts::{daily_bars, performance_bars, polyline_points, Bar};
use crate::format::money;
use crate::session::api_client;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

#[component]
fn ChartCard(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-6 space-y-4",
            h2 { class: "text-lg font-semibold", "{title}" }
            {children}
        }
    }
}

#[component]
fn ChartPlaceholder() -> Element {
    rsx! { div { class: "h-64 rounded bg-gray-100 animate-pulse" } }
}

/// Campaign performance and daily donation charts.
#[component]
pub fn AnalyticsPanel() -> Element {
    let config = use_config();
    let auth = use_auth();
    let mut daily = use_signal(|| Fetch::<DailyDonations>::Loading);
    let mut campaigns = use_signal(|| Fetch::<Vec<CampaignPerformance>>::Loading);

    let daily_config = config.clone();
    let _daily = use_resource(move || {
        let config = daily_config.clone();
        async move {
            let Some(email) = auth.peek().email() else {
                daily.set(Fetch::Failed(NO_USER.to_string()));
                return;
            };
            match api_client(&config).daily_donations(&email).await {
                Ok(series) => daily.set(Fetch::Ready(series)),
                Err(e) => {
                    tracing::error!("Failed to load donation data: {}", e);
                    daily.set(Fetch::Failed("Failed to load donation data".to_string()));
                }
            }
        }
    });

    let _campaigns = use_resource(move || {
        let config = config.clone();
        async move {
            let Some(email) = auth.peek().email() else {
                campaigns.set(Fetch::Failed(NO_USER.to_string()));
                return;
            };
            match api_client(&config).campaign_analytics(&email).await {
                Ok(rows) => campaigns.set(Fetch::Ready(rows)),
                Err(e) => {
                    tracing::error!("Failed to load campaign data: {}", e);
                    campaigns.set(Fetch::Failed("Failed to load campaign data".to_string()));
                }
            }
        }
    });

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-bold", "Analytics" }
            ChartCard { title: "Campaign Performance",
                {match campaigns() {
                    Fetch::Loading => rsx! { ChartPlaceholder {} },
                    Fetch::Failed(message) => rsx! { p { class: "text-red-500", "{message}" } },
                    Fetch::Ready(rows) if rows.is_empty() => rsx! {
                        p { class: "text-gray-500", "No campaign data yet." }
                    },
                    Fetch::Ready(rows) => rsx! { PerformanceChart { rows: rows } },
                }}
            }
            ChartCard { title: "Daily Donations",
                {match daily() {
                    Fetch::Loading => rsx! { ChartPlaceholder {} },
                    Fetch::Failed(message) => rsx! { p { class: "text-red-500", "{message}" } },
                    Fetch::Ready(series) if series.labels.is_empty() => rsx! {
                        p { class: "text-gray-500", "No donations recorded yet." }
                    },
                    Fetch::Ready(series) => rsx! { DailyChart { series: series } },
                }}
            }
        }
    }
}

#[component]
fn PerformanceChart(rows: Vec<CampaignPerformance>) -> Element {
    let bars = performance_bars(&rows);
    rsx! {
        div {
            class: "flex gap-4 text-xs text-gray-600",
            span { class: "flex items-center gap-1", span { class: "inline-block w-3 h-3 bg-blue-600 rounded-sm" } "Amount Raised" }
            span { class: "flex items-center gap-1", span { class: "inline-block w-3 h-3 bg-gray-300 rounded-sm" } "Goal" }
        }
        div {
            class: "space-y-4",
            for (i, bar) in bars.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "space-y-1",
                    p { class: "text-sm font-medium", "{bar.name}" }
                    HorizontalBar { bar: bar.raised, color: "bg-blue-600" }
                    HorizontalBar { bar: bar.goal, color: "bg-gray-300" }
                }
            }
        }
    }
}

#[component]
fn HorizontalBar(bar: Bar, color: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2",
            title: "{bar.label}",
            div {
                class: "flex-1 h-3 bg-gray-50 rounded",
                div { class: "h-full rounded {color}", style: "width: {bar.percent}%" }
            }
            span { class: "w-24 text-right text-xs text-gray-600", "{money(bar.value)}" }
        }
    }
}

#[component]
fn DailyChart(series: DailyDonations) -> Element {
    let bars = daily_bars(&series);
    let points = polyline_points(&bars, CHART_WIDTH, CHART_HEIGHT);
    let total = money(series.total());

    rsx! {
        p { class: "text-sm text-gray-600", "Total: {total}" }
        svg {
            class: "w-full h-64",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            preserve_aspect_ratio: "none",
            polyline {
                points: "{points}",
                fill: "none",
                stroke: "#2563eb",
                stroke_width: "2",
            }
        }
        div {
            class: "flex justify-between text-xs text-gray-500",
            for (i, bar) in bars.iter().enumerate() {
                span { key: "{i}", title: "{money(bar.value)}", "{bar.label}" }
            }
        }
    }
}
