//! Integration tests for click dispatch and the per-frame loop

use nebula_core::scene::{CLICK_BURST, CLICK_COLOR};
use nebula_core::tab::tab_bounds;
use nebula_core::{MenuConfig, MenuScene, Vec2};
use pretty_assertions::assert_eq;

const FRAME: f32 = 1.0 / 60.0;

fn scene() -> MenuScene {
    MenuScene::with_seed(&MenuConfig::default(), 2024)
}

fn click(scene: &mut MenuScene, point: Vec2) -> Option<usize> {
    scene.pointer_moved(point);
    scene.step(FRAME);
    scene.press(point)
}

fn active_flags(scene: &MenuScene) -> Vec<bool> {
    scene.tabs.iter().map(|t| t.is_active()).collect()
}

#[test]
fn test_click_inside_tab_two() {
    let mut scene = scene();
    let point = Vec2::new(120.0, 300.0);
    assert!(tab_bounds(2).contains(point));

    scene.pointer_moved(point);
    scene.step(FRAME);
    let before = scene.particles.len();
    assert_eq!(scene.press(point), Some(2));

    assert_eq!(active_flags(&scene), vec![false, false, true, false, false]);
    assert_eq!(scene.panel.active_tab(), Some(2));
    assert_eq!(scene.particles.len() - before, CLICK_BURST);
    assert!(scene
        .particles
        .particles()
        .iter()
        .all(|p| p.position == point && p.color == CLICK_COLOR));
}

#[test]
fn test_exactly_one_active_after_click_sequence() {
    let mut scene = scene();
    let sequence = [0, 4, 4, 1, 3, 2, 0, 2];

    for &index in &sequence {
        assert_eq!(click(&mut scene, tab_bounds(index).center()), Some(index));
        assert_eq!(scene.active_count(), 1);
        assert_eq!(scene.active_tab(), Some(index));
        assert_eq!(scene.panel.active_tab(), Some(index));

        // Clicks outside every tab leave the selection alone.
        assert_eq!(click(&mut scene, Vec2::new(700.0, 500.0)), None);
        assert_eq!(scene.active_tab(), Some(index));
    }
}

#[test]
fn test_gap_between_tabs_is_not_a_tab() {
    let mut scene = scene();
    // 180 < y < 190 lies in the spacing between tab 0 and tab 1.
    assert_eq!(click(&mut scene, Vec2::new(100.0, 185.0)), None);
    assert_eq!(scene.active_count(), 0);
}

#[test]
fn test_panel_fade_after_switch() {
    let mut scene = scene();
    click(&mut scene, tab_bounds(0).center());
    scene.step(0.25);
    assert_eq!(scene.panel.fade_alpha(), 0.5);

    click(&mut scene, tab_bounds(1).center());
    assert_eq!(scene.panel.clock(), 0.0);
    scene.step(0.5);
    assert_eq!(scene.panel.fade_alpha(), 1.0);
}

#[test]
fn test_hover_animation_through_scene() {
    let mut scene = scene();
    scene.pointer_moved(tab_bounds(3).center());
    for _ in 0..10 {
        scene.step(0.1);
    }
    assert_eq!(scene.tabs[3].hover_anim(), 1.0);
    assert_eq!(scene.tabs[2].hover_anim(), 0.0);

    scene.pointer_moved(Vec2::new(800.0, 600.0));
    for _ in 0..10 {
        scene.step(0.1);
    }
    assert_eq!(scene.tabs[3].hover_anim(), 0.0);
}

#[test]
fn test_click_particles_expire_after_two_seconds() {
    let mut scene = MenuScene::with_seed(
        &MenuConfig {
            ambient_emission: false,
            ..MenuConfig::default()
        },
        9,
    );
    let point = tab_bounds(4).center();
    click(&mut scene, point);
    assert_eq!(scene.particles.len(), CLICK_BURST);

    for _ in 0..7 {
        scene.step(0.25);
        assert_eq!(scene.particles.len(), CLICK_BURST);
    }
    scene.step(0.25);
    assert!(scene.particles.is_empty());
}

#[test]
fn test_particle_cap_from_config() {
    let mut scene = MenuScene::with_seed(
        &MenuConfig {
            max_particles: Some(30),
            ..MenuConfig::default()
        },
        1,
    );
    click(&mut scene, tab_bounds(0).center());
    click(&mut scene, tab_bounds(1).center());
    assert_eq!(scene.particles.len(), 30);
}
