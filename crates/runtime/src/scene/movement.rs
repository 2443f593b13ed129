use school_core::{EntityStore, Rect, Vec2};

/// Moves the player by `offset`, one axis at a time, stopping at solids.
///
/// Returns the player's new position, or `None` if the scene has no player.
pub fn move_player(store: &mut EntityStore, offset: Vec2) -> Option<Vec2> {
    let start = store.player()?.rect;
    let moved_x = resolve_axis(store, start, Vec2::new(offset.x, 0.0));
    let moved = resolve_axis(store, moved_x, Vec2::new(0.0, offset.y));

    let player = store.player_mut()?;
    player.rect = moved;
    Some(moved.origin())
}

fn resolve_axis(store: &EntityStore, rect: Rect, step: Vec2) -> Rect {
    if step == Vec2::ZERO {
        return rect;
    }
    let mut target = rect.translated(step);
    let sweep = swept(rect, target);
    // Solids already overlapping the start cannot be escaped by clamping.
    let solids: Vec<Rect> = store
        .solids_overlapping(&sweep)
        .map(|solid| solid.rect)
        .filter(|other| !other.intersects(&rect))
        .collect();

    for other in solids {
        if step.x > 0.0 {
            target.x = target.x.min(other.x - rect.width);
        } else if step.x < 0.0 {
            target.x = target.x.max(other.right());
        }
        if step.y > 0.0 {
            target.y = target.y.min(other.y - rect.height);
        } else if step.y < 0.0 {
            target.y = target.y.max(other.bottom());
        }
    }
    target
}

/// Area covered while moving from `from` to `to`.
fn swept(from: Rect, to: Rect) -> Rect {
    let x = from.x.min(to.x);
    let y = from.y.min(to.y);
    Rect::new(
        x,
        y,
        from.right().max(to.right()) - x,
        from.bottom().max(to.bottom()) - y,
    )
}

#[cfg(test)]
mod tests {
    use school_core::EntityKind;

    use super::*;

    fn store_with_wall() -> EntityStore {
        let mut store = EntityStore::new();
        store.spawn(EntityKind::Player, Rect::new(0.0, 0.0, 16.0, 16.0));
        store.spawn(EntityKind::Wall { name: None }, Rect::new(30.0, -50.0, 10.0, 100.0));
        store
    }

    #[test]
    fn stops_flush_against_solid() {
        let mut store = store_with_wall();
        assert_eq!(move_player(&mut store, Vec2::new(10.0, 0.0)), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(move_player(&mut store, Vec2::new(10.0, 0.0)), Some(Vec2::new(14.0, 0.0)));
    }

    #[test]
    fn slides_along_blocked_axis() {
        let mut store = store_with_wall();
        move_player(&mut store, Vec2::new(14.0, 0.0));
        assert_eq!(move_player(&mut store, Vec2::new(5.0, 5.0)), Some(Vec2::new(14.0, 5.0)));
    }

    #[test]
    fn long_step_does_not_pass_through_thin_wall() {
        let mut store = EntityStore::new();
        store.spawn(EntityKind::Player, Rect::new(0.0, 0.0, 16.0, 16.0));
        store.spawn(EntityKind::Wall { name: None }, Rect::new(30.0, -50.0, 8.0, 100.0));
        assert_eq!(move_player(&mut store, Vec2::new(48.0, 0.0)), Some(Vec2::new(14.0, 0.0)));
        assert_eq!(move_player(&mut store, Vec2::new(-48.0, 0.0)), Some(Vec2::new(-34.0, 0.0)));
    }

    #[test]
    fn long_vertical_step_stops_at_floor() {
        let mut store = EntityStore::new();
        store.spawn(EntityKind::Player, Rect::new(0.0, 0.0, 16.0, 16.0));
        store.spawn(EntityKind::Wall { name: None }, Rect::new(-20.0, 40.0, 60.0, 4.0));
        assert_eq!(move_player(&mut store, Vec2::new(0.0, 100.0)), Some(Vec2::new(0.0, 24.0)));
    }

    #[test]
    fn no_player_means_no_move() {
        let mut store = EntityStore::new();
        assert_eq!(move_player(&mut store, Vec2::new(1.0, 1.0)), None);
    }
}
