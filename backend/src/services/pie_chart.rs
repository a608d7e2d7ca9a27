use log::debug;

use crate::charts::{Figure, FigureLayout, PieTrace, Trace};
use crate::models::{Dataset, LaunchRecord, Outcome, SiteSelection};

/// Donut cut-out used by both pie variants.
pub const PIE_HOLE: f64 = 0.3;

/// Sum of the outcome class per launch site, first-seen site order.
///
/// This is the number of successful launches per site. Sites whose launches
/// all failed still get an entry with value 0.
pub fn success_totals_by_site(records: &[LaunchRecord]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for record in records {
        let class = f64::from(record.outcome.value());
        match totals.iter_mut().find(|(site, _)| site == &record.launch_site) {
            Some((_, total)) => *total += class,
            None => totals.push((record.launch_site.clone(), class)),
        }
    }
    totals
}

/// Occurrences of each outcome among the records launched from `site`.
///
/// Ordered by descending count; equal counts keep first-seen order.
pub fn outcome_counts_for_site(records: &[LaunchRecord], site: &str) -> Vec<(Outcome, usize)> {
    let mut counts: Vec<(Outcome, usize)> = Vec::new();
    for record in records.iter().filter(|r| r.launch_site == site) {
        match counts.iter_mut().find(|(outcome, _)| *outcome == record.outcome) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.outcome, 1)),
        }
    }
    // Stable sort keeps first-seen order for ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Build the success pie chart for the selected site.
///
/// With every site selected there is one slice per site; with a single site
/// there is one slice per outcome value present at that site. A site with no
/// records yields a figure with zero slices.
pub fn compute_pie_chart(dataset: &Dataset, site: &SiteSelection) -> Figure {
    let (labels, values, title): (Vec<String>, Vec<f64>, String) = match site {
        SiteSelection::All => {
            let (labels, values): (Vec<String>, Vec<f64>) =
                success_totals_by_site(dataset.records()).into_iter().unzip();
            (labels, values, "Total Success Launches By Site".to_string())
        }
        SiteSelection::Site(name) => {
            let (labels, values): (Vec<String>, Vec<f64>) =
                outcome_counts_for_site(dataset.records(), name)
                    .into_iter()
                    .map(|(outcome, count)| (outcome.to_string(), count as f64))
                    .unzip();
            (labels, values, format!("Total Success Launches for Site {}", name))
        }
    };

    debug!("Pie chart for site={}: {} slices", site, labels.len());

    Figure::new(
        vec![Trace::Pie(PieTrace {
            labels,
            values,
            hole: PIE_HOLE,
        })],
        FigureLayout::titled(title),
    )
}
