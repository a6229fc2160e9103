use sky_dodge::entities::*;
use sky_dodge::settings::*;
use sky_dodge::sprites;

fn held(left: bool, right: bool) -> InputState {
    InputState { left, right }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_overlap_detects_intersection() {
    let a = Rect::new(0, 0, 50, 50);
    let b = Rect::new(25, 25, 50, 50);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn rect_touching_edges_do_not_overlap() {
    let a = Rect::new(0, 0, 50, 50);
    let beside = Rect::new(50, 0, 50, 50); // shares the x = 50 edge
    let below = Rect::new(0, 50, 50, 50); // shares the y = 50 edge
    assert!(!a.overlaps(&beside));
    assert!(!a.overlaps(&below));
    // One column of real overlap is enough.
    assert!(a.overlaps(&Rect::new(49, 0, 50, 50)));
}

#[test]
fn rect_disjoint_rects_do_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(100, 100, 10, 10);
    assert!(!a.overlaps(&b));
}

#[test]
fn rect_contained_rect_overlaps() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(40, 40, 10, 10);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn rect_right_and_bottom_edges() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.right(), 40);
    assert_eq!(r.bottom(), 60);
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_update_moves_only_horizontally() {
    let mut p = Player::new();
    p.update(&held(true, false));
    assert_eq!(p.rect.x, 370); // 375 - 5
    assert_eq!(p.rect.y, 475);
}

#[test]
fn player_clamps_to_the_world() {
    let mut p = Player::new();
    p.rect.x = 3;
    p.update(&held(true, false));
    assert_eq!(p.rect.x, 0);

    p.rect.x = 748;
    p.update(&held(false, true));
    assert_eq!(p.rect.x, WIDTH - p.rect.w); // 750
}

#[test]
fn player_recenter_returns_to_the_spawn_point() {
    let mut p = Player::new();
    p.rect.x = 12;
    p.recenter();
    assert_eq!(p.rect.x, 375);
    assert_eq!(p.rect.y, 475);
}

// ── Enemy & PowerUp ───────────────────────────────────────────────────────────

#[test]
fn enemy_spawns_just_above_the_world() {
    let e = Enemy::new(42);
    assert_eq!(e.rect.x, 42);
    assert_eq!(e.rect.y, -sprites::ENEMY.height);
    assert_eq!(e.speed, ENEMY_SPEED);
}

#[test]
fn enemy_update_ignores_input_and_falls() {
    let mut e = Enemy::new(100);
    e.update(&held(true, false));
    assert_eq!(e.rect.y, -50 + ENEMY_SPEED);
    assert_eq!(e.rect.x, 100); // keys never steer an enemy
}

#[test]
fn powerup_update_falls_by_its_speed() {
    let mut p = PowerUp::new(330);
    assert_eq!(p.rect.y, -sprites::POWERUP.height);
    p.update(&held(false, false));
    assert_eq!(p.rect.y, -30 + POWERUP_SPEED);
}

#[test]
fn spawn_rects_match_sprite_footprints() {
    assert_eq!(Player::new().rect.w, 50);
    assert_eq!(Player::new().rect.h, 50);
    assert_eq!(Enemy::new(0).rect.w, 50);
    assert_eq!(Enemy::new(0).rect.h, 50);
    assert_eq!(PowerUp::new(0).rect.w, 30);
    assert_eq!(PowerUp::new(0).rect.h, 30);
}

#[test]
fn sprite_art_rows_are_uniform() {
    for sprite in [&sprites::PLAYER, &sprites::ENEMY, &sprites::POWERUP] {
        assert!(!sprite.art.is_empty());
        let cols = sprite.art[0].chars().count();
        for row in sprite.art {
            assert_eq!(row.chars().count(), cols);
        }
    }
}

// ── State plumbing ────────────────────────────────────────────────────────────

#[test]
fn input_state_default_is_idle() {
    let input = InputState::default();
    assert!(!input.left);
    assert!(!input.right);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player::new(),
        enemies: vec![Enemy::new(100)],
        powerups: Vec::new(),
        score: 3,
        mode: Mode::Playing,
        ticks: 90,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.score = 99;
    cloned.player.rect.x = 0;
    cloned.enemies.push(Enemy::new(200));

    assert_eq!(original.score, 3);
    assert_eq!(original.player.rect.x, 375);
    assert_eq!(original.enemies.len(), 1);
}
