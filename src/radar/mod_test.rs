//! Tests for the radar plot pipeline, from server payloads to coordinates.

use super::{AxisValue, PLOT_CENTER, PLOT_SIZE, Quadrant, Ring, chart_geometry, place_blips};
use crate::api::types::Technology;

fn tech(id: &str, name: &str, quadrant: &str, ring: &str) -> Technology {
    Technology {
        id: id.into(),
        name: name.into(),
        quadrant: quadrant.into(),
        ring: ring.into(),
        description: None,
        source: None,
        date_of_assessment: None,
        uri: None,
        created_at: "2024-01-01T00:00:00".into(),
        updated_at: "2024-01-01T00:00:00".into(),
    }
}

#[test]
fn end_to_end_payload_to_blips() {
    let payload = r#"[
        {
            "_id": "665f1c2b8d4e0a1b2c3d4e5f",
            "name": "Rust",
            "quadrant": "Languages & Frameworks",
            "ring": "Adopt",
            "description": "Memory safe systems language",
            "source": "manual",
            "date_of_assessment": "2024-05-01T00:00:00",
            "uri": "https://www.rust-lang.org",
            "created_at": "2024-05-01T12:00:00",
            "updated_at": "2024-05-01T12:00:00"
        },
        {
            "_id": "665f1c2b8d4e0a1b2c3d4e60",
            "name": "Kubernetes",
            "quadrant": "Platforms",
            "ring": "Trial",
            "description": null,
            "source": null,
            "date_of_assessment": null,
            "uri": null,
            "created_at": "2024-05-02T12:00:00",
            "updated_at": "2024-05-02T12:00:00"
        },
        {
            "_id": "665f1c2b8d4e0a1b2c3d4e61",
            "name": "Mystery Box",
            "quadrant": "Gadgets",
            "ring": "Adopt",
            "description": null,
            "source": null,
            "date_of_assessment": null,
            "uri": null,
            "created_at": "2024-05-03T12:00:00",
            "updated_at": "2024-05-03T12:00:00"
        }
    ]"#;

    let items: Vec<Technology> = serde_json::from_str(payload).unwrap();
    assert_eq!(items.len(), 3);

    let blips = place_blips(&items);

    // The unknown quadrant drops out; the rest land on the plot.
    assert_eq!(blips.len(), 2);
    assert_eq!(blips[0].name, "Rust");
    assert_eq!(blips[1].name, "Kubernetes");
    for blip in &blips {
        assert!(blip.x >= 0.0 && blip.x <= PLOT_SIZE);
        assert!(blip.y >= 0.0 && blip.y <= PLOT_SIZE);
    }
}

#[test]
fn full_grid_coverage_stays_on_the_plot() {
    let mut items = Vec::new();
    for quadrant in Quadrant::ALL {
        for ring in Ring::ALL {
            for i in 0..3 {
                let id = format!("{}-{}-{i}", quadrant.label(), ring.label());
                items.push(tech(&id, &id, quadrant.label(), ring.label()));
            }
        }
    }

    let blips = place_blips(&items);
    assert_eq!(blips.len(), 48);
    for blip in &blips {
        let dx = blip.x - PLOT_CENTER;
        let dy = blip.y - PLOT_CENTER;
        assert!(
            dx.hypot(dy) <= PLOT_CENTER,
            "blip {} left the plot circle",
            blip.id
        );
    }
}

#[test]
fn repeated_layouts_share_coordinates() {
    let items = vec![
        tech("t1", "Rust", "Languages & Frameworks", "Adopt"),
        tech("t2", "Terraform", "Tools", "Trial"),
        tech("t3", "Micro Frontends", "Techniques", "Hold"),
    ];
    let first = place_blips(&items);
    let second = place_blips(&items);
    assert_eq!(first, second);
}

#[test]
fn ring_counts_feed_the_score_chart() {
    let items = vec![
        tech("t1", "Rust", "Languages & Frameworks", "Adopt"),
        tech("t2", "Terraform", "Tools", "Adopt"),
        tech("t3", "Kubernetes", "Platforms", "Trial"),
        tech("t4", "Micro Frontends", "Techniques", "Hold"),
    ];

    // Score each ring by its share of the portfolio.
    let samples: Vec<AxisValue> = Ring::ALL
        .iter()
        .map(|ring| {
            let count = items.iter().filter(|t| t.ring == ring.label()).count();
            #[allow(clippy::cast_precision_loss)]
            let share = count as f64 / items.len() as f64;
            AxisValue { name: ring.label().to_string(), value: share }
        })
        .collect();

    let chart = chart_geometry(&samples, 400.0, 400.0);
    assert_eq!(chart.axes.len(), 4);
    for vertex in &chart.outline {
        assert!(vertex.x.hypot(vertex.y) <= chart.radius + 1e-10);
    }
}
