//! Chart series for the analytics page. Values are only paired with their
//! labels and scaled against the largest value; nothing is aggregated.

use api::{CampaignPerformance, DailyDonations};

/// A labelled value with its height as a share of the tallest one.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// `0..=100`
    pub percent: f64,
}

/// Raised-vs-goal pair for one campaign, scaled to a shared axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceBar {
    pub name: String,
    pub raised: Bar,
    pub goal: Bar,
}

fn scale(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| v.is_finite()).fold(0.0, f64::max)
}

pub fn daily_bars(series: &DailyDonations) -> Vec<Bar> {
    let points = series.points();
    let max = max_of(points.iter().map(|(_, v)| *v));
    points
        .into_iter()
        .map(|(label, value)| Bar {
            label,
            value,
            percent: scale(value, max),
        })
        .collect()
}

pub fn performance_bars(rows: &[CampaignPerformance]) -> Vec<PerformanceBar> {
    let max = max_of(rows.iter().flat_map(|r| [r.amount_donated, r.goal]));
    rows.iter()
        .map(|r| PerformanceBar {
            name: r.title.clone(),
            raised: Bar {
                label: "Amount Raised".to_string(),
                value: r.amount_donated,
                percent: scale(r.amount_donated, max),
            },
            goal: Bar {
                label: "Goal".to_string(),
                value: r.goal,
                percent: scale(r.goal, max),
            },
        })
        .collect()
}

/// SVG `points` attribute for a line through the bars, in a `width` by
/// `height` box with the origin at the bottom left.
pub fn polyline_points(bars: &[Bar], width: f64, height: f64) -> String {
    let step = if bars.len() > 1 {
        width / (bars.len() - 1) as f64
    } else {
        0.0
    };
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let x = i as f64 * step;
            let y = height - bar.percent / 100.0 * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_bars_scale_to_max() {
        let series = DailyDonations {
            labels: vec!["Mon".into(), "Tue".into(), "Wed".into()],
            data: vec![50.0, 200.0, 0.0],
        };
        let bars = daily_bars(&series);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].percent, 25.0);
        assert_eq!(bars[1].percent, 100.0);
        assert_eq!(bars[2].percent, 0.0);
        assert_eq!(bars[1].label, "Tue");
    }

    #[test]
    fn test_all_zero_series() {
        let series = DailyDonations {
            labels: vec!["Mon".into()],
            data: vec![0.0],
        };
        assert_eq!(daily_bars(&series)[0].percent, 0.0);
        assert!(daily_bars(&DailyDonations::default()).is_empty());
    }

    #[test]
    fn test_performance_shares_one_axis() {
        let rows = vec![
            CampaignPerformance {
                title: "Parks".into(),
                amount_donated: 500.0,
                goal: 1000.0,
            },
            CampaignPerformance {
                title: "Water".into(),
                amount_donated: 2000.0,
                goal: 1500.0,
            },
        ];
        let bars = performance_bars(&rows);
        assert_eq!(bars[0].raised.percent, 25.0);
        assert_eq!(bars[0].goal.percent, 50.0);
        assert_eq!(bars[1].raised.percent, 100.0);
        assert_eq!(bars[1].name, "Water");
    }

    #[test]
    fn test_polyline_points() {
        let bars = vec![
            Bar {
                label: "a".into(),
                value: 0.0,
                percent: 0.0,
            },
            Bar {
                label: "b".into(),
                value: 1.0,
                percent: 100.0,
            },
        ];
        assert_eq!(polyline_points(&bars, 100.0, 50.0), "0.0,50.0 100.0,0.0");
        assert_eq!(polyline_points(&[], 100.0, 50.0), "");
    }
}
