//! Score Ring Component
//!
//! Circular SVG ring showing the derived health score out of 100.

use leptos::*;

const RADIUS: f64 = 52.0;

/// Circumference of the ring circle.
fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * RADIUS
}

/// Dash offset for a score: 0 keeps the ring empty, 100 closes it.
fn dash_offset(score: u8) -> f64 {
    let filled = f64::from(score.min(100)) / 100.0;
    circumference() * (1.0 - filled)
}

/// Ring color bucket for a score.
fn score_color(score: u8) -> &'static str {
    if score >= 80 {
        "stroke-green-400"
    } else if score >= 50 {
        "stroke-yellow-400"
    } else {
        "stroke-red-400"
    }
}

/// Health score ring; renders "--" when no score is available.
#[component]
pub fn ScoreRing(
    #[prop(into)]
    score: Signal<Option<u8>>,
    #[prop(default = "Health Score")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <svg viewBox="0 0 120 120" class="w-32 h-32 -rotate-90">
                <circle
                    cx="60" cy="60" r=RADIUS.to_string()
                    fill="none"
                    stroke-width="10"
                    class="stroke-gray-700"
                />
                {move || score.get().map(|s| view! {
                    <circle
                        cx="60" cy="60" r=RADIUS.to_string()
                        fill="none"
                        stroke-width="10"
                        stroke-linecap="round"
                        stroke-dasharray=format!("{:.2}", circumference())
                        stroke-dashoffset=format!("{:.2}", dash_offset(s))
                        class=format!("{} transition-all duration-500", score_color(s))
                    />
                })}
            </svg>

            <div class="-mt-24 mb-16 text-center">
                <div class="text-3xl font-bold">
                    {move || score.get().map(|s| s.to_string()).unwrap_or_else(|| "--".to_string())}
                </div>
                <div class="text-xs text-gray-400">{label}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_score_closes_the_ring() {
        assert!(dash_offset(100).abs() < 1e-9);
    }

    #[test]
    fn zero_score_leaves_the_ring_open() {
        assert!((dash_offset(0) - circumference()).abs() < 1e-9);
    }

    #[test]
    fn half_score_is_half_the_circumference() {
        assert!((dash_offset(50) - circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn scores_above_one_hundred_are_clamped() {
        assert_eq!(dash_offset(250), dash_offset(100));
    }

    #[test]
    fn color_buckets() {
        assert_eq!(score_color(92), "stroke-green-400");
        assert_eq!(score_color(67), "stroke-yellow-400");
        assert_eq!(score_color(12), "stroke-red-400");
    }
}
