use std::collections::HashSet;

use gpui_bar_chart::data_types::{ContainerSize, Margins, Row, RowSet, Viewport};
use gpui_bar_chart::scales::ScaleModel;
use gpui_bar_chart::scene::{Join, PointerEvent, RenderReport, Scene, SceneBinder};
use gpui_bar_chart::tooltip::TooltipController;
use rand::{Rng, SeedableRng};

fn rows(pairs: &[(&str, f64)]) -> RowSet {
    RowSet::new(pairs.iter().map(|(c, v)| Row::new(*c, *v)).collect()).unwrap()
}

fn fit(rows: &RowSet, width: f32, height: f32) -> ScaleModel {
    let vp = Viewport::from_container(ContainerSize::new(width, height), Margins::default());
    ScaleModel::fit(rows, &vp, 0.5)
}

fn assert_bijection(scene: &Scene, rows: &RowSet) {
    assert_eq!(scene.len(), rows.len());
    let keys: HashSet<&str> = scene.bars().iter().map(|b| b.key()).collect();
    assert_eq!(keys.len(), scene.len(), "duplicate keys in scene");
    for row in rows {
        assert!(keys.contains(row.category.as_str()), "missing bar for {}", row.category);
    }
}

#[test]
fn test_initial_render_creates_one_bar_per_row() {
    let rows = rows(&[("Chess", 120.0), ("Go", 45.0), ("Checkers", 900.0)]);
    let scales = fit(&rows, 800.0, 400.0);
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();

    let report = SceneBinder::render(&mut scene, &rows, &scales, 1.0, &tooltip);

    assert_eq!(
        report,
        RenderReport {
            created: 3,
            updated: 0,
            removed: 0
        }
    );
    assert_bijection(&scene, &rows);

    let checkers = scene.by_key("Checkers").unwrap();
    assert_eq!(checkers.geometry.x, 1.0);
    assert_eq!(checkers.geometry.y, 46.0);
    assert_eq!(checkers.geometry.width, 590.0);
    assert_eq!(checkers.geometry.height, 46.0);
}

#[test]
fn test_render_is_idempotent() {
    let rows = rows(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    let scales = fit(&rows, 500.0, 300.0);
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();

    SceneBinder::render(&mut scene, &rows, &scales, 1.0, &tooltip);
    let ids: Vec<_> = scene.bars().iter().map(|b| b.id()).collect();
    let geometry: Vec<_> = scene.bars().iter().map(|b| b.geometry).collect();

    let second = SceneBinder::render(&mut scene, &rows, &scales, 1.0, &tooltip);
    assert_eq!(second.created, 0);
    assert_eq!(second.removed, 0);
    assert_eq!(second.updated, 3);
    assert_eq!(ids, scene.bars().iter().map(|b| b.id()).collect::<Vec<_>>());
    assert_eq!(geometry, scene.bars().iter().map(|b| b.geometry).collect::<Vec<_>>());
}

#[test]
fn test_update_does_not_rebind_listeners() {
    let rows = rows(&[("a", 1.0), ("b", 2.0)]);
    let scales = fit(&rows, 500.0, 300.0);
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();

    for _ in 0..5 {
        SceneBinder::render(&mut scene, &rows, &scales, 1.0, &tooltip);
    }

    for bar in scene.bars() {
        let enters = bar
            .listeners()
            .iter()
            .filter(|l| l.event == PointerEvent::Enter)
            .count();
        let leaves = bar
            .listeners()
            .iter()
            .filter(|l| l.event == PointerEvent::Leave)
            .count();
        assert_eq!((enters, leaves), (1, 1), "listeners re-attached on {}", bar.key());
    }
}

#[test]
fn test_join_classifies_enter_update_exit() {
    let old = rows(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    let new = rows(&[("b", 5.0), ("c", 1.0), ("d", 4.0)]);
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();
    SceneBinder::render(&mut scene, &old, &fit(&old, 500.0, 300.0), 1.0, &tooltip);
    let a_id = scene.by_key("a").unwrap().id();
    let b_id = scene.by_key("b").unwrap().id();

    let join = Join::compute(&scene, &new);
    // new order is c(1), d(4), b(5)
    assert_eq!(join.enter, vec![1]);
    assert_eq!(join.update.len(), 2);
    assert_eq!(join.exit, vec![a_id]);

    let scales = fit(&new, 500.0, 300.0);
    let report = SceneBinder::render(&mut scene, &new, &scales, 1.0, &tooltip);
    assert_eq!(
        report,
        RenderReport {
            created: 1,
            updated: 2,
            removed: 1
        }
    );
    assert_bijection(&scene, &new);

    // Updated bars keep identity and carry the new datum and geometry.
    let b = scene.by_key("b").unwrap();
    assert_eq!(b.id(), b_id);
    assert_eq!(b.datum().value, 5.0);
    assert_eq!(b.geometry.width, scales.value.map(5.0));
    assert_eq!(b.geometry.y, scales.category.position("b").unwrap());
}

#[test]
fn test_empty_rows_empty_scene() {
    let empty = RowSet::default();
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();
    let report = SceneBinder::render(&mut scene, &empty, &fit(&empty, 500.0, 300.0), 1.0, &tooltip);
    assert_eq!(report, RenderReport::default());
    assert!(scene.is_empty());

    // Emptying a populated scene removes everything.
    let some = rows(&[("a", 1.0), ("b", 2.0)]);
    SceneBinder::render(&mut scene, &some, &fit(&some, 500.0, 300.0), 1.0, &tooltip);
    let report = SceneBinder::render(&mut scene, &empty, &fit(&empty, 500.0, 300.0), 1.0, &tooltip);
    assert_eq!(report.removed, 2);
    assert!(scene.is_empty());
}

#[test]
fn test_bijection_random_row_sets() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();

    for _ in 0..30 {
        let n = rng.random_range(0..40);
        let pairs: Vec<Row> = (0..n)
            .filter_map(|i| {
                if rng.random_bool(0.7) {
                    Some(Row::new(format!("game-{i}"), rng.random_range(0.0..10_000.0)))
                } else {
                    None
                }
            })
            .collect();
        let set = RowSet::new(pairs).unwrap();
        let scales = fit(&set, rng.random_range(300.0..1600.0), rng.random_range(200.0..900.0));

        SceneBinder::render(&mut scene, &set, &scales, 1.0, &tooltip);
        assert_bijection(&scene, &set);

        for bar in scene.bars() {
            assert_eq!(bar.datum().category, bar.key());
            assert_eq!(bar.geometry.width, scales.value.map(bar.datum().value));
        }
    }
}

#[test]
fn test_hit_test_finds_bar() {
    let rows = rows(&[("Chess", 120.0), ("Go", 45.0), ("Checkers", 900.0)]);
    let scales = fit(&rows, 800.0, 400.0);
    let tooltip = TooltipController::new([-10.0, 0.0]);
    let mut scene = Scene::new();
    SceneBinder::render(&mut scene, &rows, &scales, 1.0, &tooltip);

    let go = scene.by_key("Go").unwrap().id();
    assert_eq!(scene.hit_test(10.0, 240.0), Some(go));
    // Gap between bands.
    assert_eq!(scene.hit_test(10.0, 200.0), None);
    assert_eq!(scene.hit_test(-5.0, 240.0), None);
}
