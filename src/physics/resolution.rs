//! Separating colliding entities based on the events found by detection.

use std::cmp::Ordering;

use super::{
    collision::{
        narrowphase, Collider, ColliderShape, CollisionBuffer, CollisionEvent, Contact,
        ContactKind, AABB,
    },
    CollisionState, Velocity,
};
use crate::{math as m, transform::Transform};

/// What to do with box collisions that have no clear contact axis.
///
/// These happen when a swept box hits another exactly corner to corner,
/// or when a box was already overlapping another one at the start of the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum DiagonalPolicy {
    /// Leave the boxes where they are. They're still marked as colliding.
    Ignore,
    /// Corner hits stop the mover at the contact point on both axes.
    /// Overlaps push the source out along the axis of least penetration,
    /// or both axes if the penetration is equal.
    #[default]
    Separate,
}

/// Parameters for collision resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct ResolverParams {
    pub diagonal_policy: DiagonalPolicy,
}

impl ResolverParams {
    #[inline]
    pub fn with_diagonal_policy(mut self, policy: DiagonalPolicy) -> Self {
        self.diagonal_policy = policy;
        self
    }
}

/// The side of a target a source ran into, with y pointing down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl TouchSide {
    /// The side of the target a source pushed in direction `push` is on.
    /// `None` if the push is zero or exactly diagonal.
    pub fn from_push(push: m::Vec2) -> Option<Self> {
        match push.x.abs().total_cmp(&push.y.abs()) {
            Ordering::Greater if push.x < 0.0 => Some(TouchSide::Left),
            Ordering::Greater => Some(TouchSide::Right),
            Ordering::Less if push.y < 0.0 => Some(TouchSide::Top),
            Ordering::Less => Some(TouchSide::Bottom),
            Ordering::Equal => None,
        }
    }
}

/// A collision that was still happening when it came up for resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCollision<T> {
    pub event: CollisionEvent<T>,
    /// The contact found when checking the pair again on current positions.
    pub contact: Contact,
    /// Translation applied to the source.
    pub correction: m::Vec2,
    /// The side of the target the source ended up against.
    pub side: Option<TouchSide>,
}

type EventFilter<T> = dyn Fn(&CollisionEvent<T>) -> bool + Send + Sync;

/// Moves the sources of collision events out of their targets and stops their movement
/// into them, earliest contact first.
///
/// Every event is checked again on current positions before resolving,
/// because resolving an earlier one may have already separated the pair.
/// Only sources are moved. Targets, including passive colliders, are left in place.
pub struct CollisionResolver<T> {
    pub params: ResolverParams,
    filter: Box<EventFilter<T>>,
}

impl<T> Default for CollisionResolver<T> {
    fn default() -> Self {
        Self::new(ResolverParams::default())
    }
}

impl<T> CollisionResolver<T> {
    /// Create a resolver that resolves every event.
    pub fn new(params: ResolverParams) -> Self {
        Self {
            params,
            filter: Box::new(|_| true),
        }
    }

    /// Only resolve events for which `filter` returns true.
    /// The rest are dropped from the buffer along with everything else.
    ///
    /// Typically this checks the event's tag, so that e.g. pickups don't block movement.
    pub fn with_filter(
        mut self,
        filter: impl Fn(&CollisionEvent<T>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Resolve the events in `buffer` in order of contact time, leaving the buffer empty.
    ///
    /// Every [`CollisionState`] is reset first, and entities involved in a resolved collision
    /// get one inserted if they don't have one.
    /// Events whose entities have been despawned or lost their collider or transform
    /// are skipped.
    pub fn resolve(
        &self,
        world: &mut hecs::World,
        buffer: &mut CollisionBuffer<T>,
    ) -> Vec<ResolvedCollision<T>> {
        for (_, state) in world.query_mut::<&mut CollisionState>() {
            *state = CollisionState::default();
        }

        let mut events: Vec<CollisionEvent<T>> =
            buffer.drain().filter(|evt| (self.filter)(evt)).collect();
        // sort_by is stable, so events with equal times keep their detection order
        events.sort_by(|a, b| a.time.total_cmp(&b.time));

        let event_count = events.len();
        let resolved: Vec<ResolvedCollision<T>> = events
            .into_iter()
            .filter_map(|event| self.resolve_one(world, event))
            .collect();

        log::debug!(
            "Resolved {} of {} collision events",
            resolved.len(),
            event_count
        );
        resolved
    }

    fn resolve_one(
        &self,
        world: &mut hecs::World,
        event: CollisionEvent<T>,
    ) -> Option<ResolvedCollision<T>> {
        let (source, target) = (event.source, event.target);

        // earlier resolutions may have moved either entity
        for entity in [source, target] {
            let (coll, tr) = world
                .query_one_mut::<(&mut Collider, &Transform)>(entity)
                .ok()?;
            coll.update_world_vertices(tr);
        }

        let (contact, separation) = {
            let source_coll = world.get::<&Collider>(source).ok()?;
            let source_tr = world.get::<&Transform>(source).ok()?;
            let target_coll = world.get::<&Collider>(target).ok()?;
            let target_tr = world.get::<&Transform>(target).ok()?;

            let contact = narrowphase::recheck(
                &source_coll,
                &source_tr,
                &target_coll,
                &target_tr,
            )?;
            let kind = ContactKind::of(&source_coll, &target_coll);
            let separation = match (kind, &source_coll.shape) {
                (ContactKind::Swept, ColliderShape::Rect(bounds)) => self.separate_boxes(
                    &contact,
                    bounds,
                    &source_tr,
                    &target_coll.world_aabb(&target_tr),
                ),
                _ => separate_polygons(&contact, source_tr.position),
            };
            (contact, separation)
        };

        mark_colliding(world, source);
        mark_colliding(world, target);

        let (tr, vel) = world
            .query_one_mut::<(&mut Transform, Option<&mut Velocity>)>(source)
            .ok()?;
        let correction = separation.position - tr.position;
        tr.position = separation.position;
        if let Some(vel) = vel {
            separation.velocity_fix.apply(&mut vel.linear);
        }

        log::trace!(
            "Resolved {:?} against {:?}: moved by {:?}",
            source,
            target,
            correction
        );

        Some(ResolvedCollision {
            event,
            contact,
            correction,
            side: TouchSide::from_push(separation.push),
        })
    }

    /// Box pairs are resolved by placing the source's edge at the contact point
    /// on every axis the contact normal has a component on.
    fn separate_boxes(
        &self,
        contact: &Contact,
        bounds: &AABB,
        source_tr: &Transform,
        target_rect: &AABB,
    ) -> Separation {
        let mut fix_x = contact.normal.x != 0.0;
        let mut fix_y = contact.normal.y != 0.0;

        if !fix_x && !fix_y && self.params.diagonal_policy == DiagonalPolicy::Separate {
            let start = bounds.at_position(source_tr.previous_position);
            if !start.intersects(target_rect) {
                // corner hit, the contact point is valid on both axes
                fix_x = true;
                fix_y = true;
            } else {
                let push = min_penetration(&bounds.at_position(source_tr.position), target_rect);
                return Separation {
                    position: source_tr.position + push,
                    push,
                    velocity_fix: VelocityFix::Axes {
                        x: push.x != 0.0,
                        y: push.y != 0.0,
                    },
                };
            }
        }

        let mut position = source_tr.position;
        if fix_x {
            position.x = contact.point.x - bounds.width() / 2.0 - bounds.min.x;
        }
        if fix_y {
            position.y = contact.point.y - bounds.height() / 2.0 - bounds.min.y;
        }
        Separation {
            position,
            push: contact.normal,
            velocity_fix: VelocityFix::Axes { x: fix_x, y: fix_y },
        }
    }
}

/// Where to put the source after a collision and what to do to its velocity.
struct Separation {
    position: m::Vec2,
    /// Direction the source was pushed in, used to find the side it touched.
    push: m::Vec2,
    velocity_fix: VelocityFix,
}

enum VelocityFix {
    /// Zero out the marked axes.
    Axes { x: bool, y: bool },
    /// Remove the component moving along this normal.
    AlongNormal(m::Vec2),
}

impl VelocityFix {
    fn apply(&self, vel: &mut m::Vec2) {
        match *self {
            VelocityFix::Axes { x, y } => {
                if x {
                    vel.x = 0.0;
                }
                if y {
                    vel.y = 0.0;
                }
            }
            VelocityFix::AlongNormal(normal) => {
                let into_contact = vel.dot(normal);
                if into_contact > 0.0 {
                    *vel -= into_contact * normal;
                }
            }
        }
    }
}

/// Polygon pairs are resolved by pushing the source back along the minimum translation vector.
fn separate_polygons(contact: &Contact, position: m::Vec2) -> Separation {
    Separation {
        position: position - contact.normal * contact.depth,
        push: -contact.normal,
        velocity_fix: VelocityFix::AlongNormal(contact.normal),
    }
}

/// The shortest translation on the axis of least penetration that moves `source` out of `target`.
/// If both axes penetrate equally, both are included.
fn min_penetration(source: &AABB, target: &AABB) -> m::Vec2 {
    let shortest = |towards_min: f64, towards_max: f64| {
        if towards_max < -towards_min {
            towards_max
        } else {
            towards_min
        }
    };
    let dx = shortest(target.left() - source.right(), target.right() - source.left());
    let dy = shortest(target.top() - source.bottom(), target.bottom() - source.top());

    match dx.abs().total_cmp(&dy.abs()) {
        Ordering::Less => m::Vec2::new(dx, 0.0),
        Ordering::Greater => m::Vec2::new(0.0, dy),
        Ordering::Equal => m::Vec2::new(dx, dy),
    }
}

fn mark_colliding(world: &mut hecs::World, entity: hecs::Entity) {
    if let Ok(state) = world.query_one_mut::<&mut CollisionState>(entity) {
        state.is_colliding = true;
        state.contact_count += 1;
        return;
    }
    let state = CollisionState {
        is_colliding: true,
        contact_count: 1,
    };
    if world.insert_one(entity, state).is_err() {
        log::warn!("Tried to mark despawned entity {entity:?} as colliding");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{collision::Layer, CollisionDetector};

    fn square_box() -> Collider {
        Collider::new_box(m::Vec2::zero(), m::Vec2::new(20.0, 20.0))
    }

    fn square_convex() -> Collider {
        Collider::new_convex(vec![
            m::Vec2::new(0.0, 0.0),
            m::Vec2::new(20.0, 0.0),
            m::Vec2::new(20.0, 20.0),
            m::Vec2::new(0.0, 20.0),
        ])
        .unwrap()
    }

    fn wall_at(x: f64, y: f64) -> (Collider, Transform) {
        (
            square_box().with_passive(true),
            Transform::from_position(m::Vec2::new(x, y)),
        )
    }

    fn event(source: hecs::Entity, target: hecs::Entity, time: f64) -> CollisionEvent<()> {
        CollisionEvent {
            source,
            target,
            point: m::Vec2::zero(),
            normal: m::Vec2::zero(),
            time,
            depth: 0.0,
            layer: Layer::Any,
            tag: (),
        }
    }

    fn detect_and_resolve(
        world: &mut hecs::World,
        resolver: &CollisionResolver<()>,
    ) -> Vec<ResolvedCollision<()>> {
        let mut buffer = CollisionBuffer::new();
        CollisionDetector::new(|_: &hecs::World, _: hecs::Entity, _: hecs::Entity| ())
            .detect(world, &mut buffer);
        let resolved = resolver.resolve(world, &mut buffer);
        assert!(buffer.is_empty());
        resolved
    }

    fn position(world: &hecs::World, entity: hecs::Entity) -> m::Vec2 {
        world.get::<&Transform>(entity).unwrap().position
    }

    #[test]
    fn touch_sides() {
        assert_eq!(
            TouchSide::from_push(m::Vec2::new(-1.0, 0.0)),
            Some(TouchSide::Left)
        );
        assert_eq!(
            TouchSide::from_push(m::Vec2::new(2.0, 1.0)),
            Some(TouchSide::Right)
        );
        assert_eq!(
            TouchSide::from_push(m::Vec2::new(0.0, -3.0)),
            Some(TouchSide::Top)
        );
        assert_eq!(
            TouchSide::from_push(m::Vec2::new(0.5, 1.0)),
            Some(TouchSide::Bottom)
        );
        assert_eq!(TouchSide::from_push(m::Vec2::new(1.0, -1.0)), None);
        assert_eq!(TouchSide::from_push(m::Vec2::zero()), None);
    }

    #[test]
    fn penetration_axis() {
        let target = AABB::new(m::Vec2::zero(), m::Vec2::new(10.0, 10.0));
        let barely_left = AABB::new(m::Vec2::new(-8.0, 2.0), m::Vec2::new(10.0, 4.0));
        assert_eq!(
            min_penetration(&barely_left, &target),
            m::Vec2::new(-2.0, 0.0)
        );
        let barely_below = AABB::new(m::Vec2::new(3.0, 9.0), m::Vec2::new(4.0, 10.0));
        assert_eq!(
            min_penetration(&barely_below, &target),
            m::Vec2::new(0.0, 1.0)
        );
        let corner = AABB::new(m::Vec2::new(7.0, 7.0), m::Vec2::new(10.0, 10.0));
        assert_eq!(min_penetration(&corner, &target), m::Vec2::new(3.0, 3.0));
    }

    #[test]
    fn resolves_in_contact_time_order() {
        let mut world = hecs::World::new();
        // two movers heading right, the second one hits its wall earlier
        let late = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::zero(), m::Vec2::new(10.0, 0.0)),
        ));
        world.spawn(wall_at(25.0, 0.0));
        let early = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::new(0.0, 100.0), m::Vec2::new(10.0, 100.0)),
        ));
        world.spawn(wall_at(22.0, 100.0));

        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        itertools::assert_equal(
            resolved.iter().map(|r| r.event.source),
            [early, late],
        );
        assert!(resolved.windows(2).all(|w| w[0].event.time <= w[1].event.time));
        assert!((position(&world, early).x - 2.0).abs() < 1e-9);
        assert!((position(&world, late).x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn stale_events_are_revalidated() {
        let mut world = hecs::World::new();
        let mover = world.spawn((square_box(), Transform::from_position(m::Vec2::zero())));
        let wall = world.spawn(wall_at(100.0, 0.0));

        // the pair stopped overlapping after detection
        let mut buffer = CollisionBuffer::new();
        buffer.push(event(mover, wall, 0.0));
        let resolved = CollisionResolver::default().resolve(&mut world, &mut buffer);
        assert!(resolved.is_empty());
        assert!(buffer.is_empty());
        assert_eq!(position(&world, mover), m::Vec2::zero());
    }

    #[test]
    fn despawned_entities_are_skipped() {
        let mut world = hecs::World::new();
        let mover = world.spawn((square_box(), Transform::from_position(m::Vec2::zero())));
        let coin = world.spawn(wall_at(5.0, 0.0));
        let no_collider = world.spawn((Transform::default(),));

        let mut buffer = CollisionBuffer::new();
        buffer.push(event(mover, coin, 0.0));
        buffer.push(event(mover, no_collider, 0.0));
        world.despawn(coin).unwrap();

        let resolved = CollisionResolver::default().resolve(&mut world, &mut buffer);
        assert!(resolved.is_empty());
        assert!(buffer.is_empty());
        assert!(world.get::<&CollisionState>(mover).is_err());
    }

    #[test]
    fn collision_state_is_reset_and_inserted() {
        let mut world = hecs::World::new();
        let mover = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::zero(), m::Vec2::new(10.0, 0.0)),
        ));
        let wall = world.spawn(wall_at(25.0, 0.0));
        let bystander = world.spawn((
            CollisionState {
                is_colliding: true,
                contact_count: 3,
            },
        ));

        detect_and_resolve(&mut world, &CollisionResolver::default());
        for entity in [mover, wall] {
            let state = *world.get::<&CollisionState>(entity).unwrap();
            assert_eq!(
                state,
                CollisionState {
                    is_colliding: true,
                    contact_count: 1
                }
            );
        }
        assert_eq!(
            *world.get::<&CollisionState>(bystander).unwrap(),
            CollisionState::default()
        );

        // next frame nothing moves into anything new, but the mover is flush with the wall
        world.get::<&mut Transform>(mover).unwrap().begin_frame();
        detect_and_resolve(&mut world, &CollisionResolver::default());
        assert!(!world.get::<&CollisionState>(mover).unwrap().is_colliding);
    }

    #[test]
    fn filtered_events_are_dropped() {
        let mut world = hecs::World::new();
        let mover = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::zero(), m::Vec2::new(10.0, 0.0)),
            Velocity {
                linear: m::Vec2::new(10.0, 0.0),
            },
        ));
        world.spawn(wall_at(25.0, 0.0));

        let resolver = CollisionResolver::default().with_filter(|_| false);
        assert!(detect_and_resolve(&mut world, &resolver).is_empty());
        assert_eq!(position(&world, mover), m::Vec2::new(10.0, 0.0));
        assert_eq!(
            world.get::<&Velocity>(mover).unwrap().linear,
            m::Vec2::new(10.0, 0.0)
        );
    }

    #[test]
    fn falling_box_lands() {
        let mut world = hecs::World::new();
        let faller = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::zero(), m::Vec2::new(0.0, 8.0)),
            Velocity {
                linear: m::Vec2::new(3.0, 8.0),
            },
        ));
        world.spawn(wall_at(-10.0, 25.0));

        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].side, Some(TouchSide::Top));
        assert!((position(&world, faller).y - 5.0).abs() < 1e-9);
        assert_eq!(position(&world, faller).x, 0.0);
        assert_eq!(
            world.get::<&Velocity>(faller).unwrap().linear,
            m::Vec2::new(3.0, 0.0)
        );
    }

    #[test]
    fn corner_hits_follow_diagonal_policy() {
        let spawn_corner_case = |world: &mut hecs::World| {
            let mover = world.spawn((
                square_box(),
                Transform::moving(m::Vec2::zero(), m::Vec2::new(10.0, 10.0)),
                Velocity {
                    linear: m::Vec2::new(10.0, 10.0),
                },
            ));
            world.spawn(wall_at(25.0, 25.0));
            mover
        };

        let mut world = hecs::World::new();
        let mover = spawn_corner_case(&mut world);
        let resolver = CollisionResolver::new(
            ResolverParams::default().with_diagonal_policy(DiagonalPolicy::Ignore),
        );
        let resolved = detect_and_resolve(&mut world, &resolver);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].contact.normal, m::Vec2::zero());
        assert_eq!(resolved[0].correction, m::Vec2::zero());
        assert_eq!(resolved[0].side, None);
        assert!(world.get::<&CollisionState>(mover).unwrap().is_colliding);

        let mut world = hecs::World::new();
        let mover = spawn_corner_case(&mut world);
        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].side, None);
        // stopped with the corner touching the wall's corner
        assert!((position(&world, mover) - m::Vec2::new(5.0, 5.0)).mag() < 1e-9);
        assert_eq!(
            world.get::<&Velocity>(mover).unwrap().linear,
            m::Vec2::zero()
        );
    }

    #[test]
    fn stationary_overlap_follows_diagonal_policy() {
        let mut world = hecs::World::new();
        let stuck = world.spawn((square_box(), Transform::from_position(m::Vec2::zero())));
        world.spawn(wall_at(17.0, 5.0));

        let ignoring = CollisionResolver::new(
            ResolverParams::default().with_diagonal_policy(DiagonalPolicy::Ignore),
        );
        assert_eq!(detect_and_resolve(&mut world, &ignoring).len(), 1);
        assert_eq!(position(&world, stuck), m::Vec2::zero());

        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].correction, m::Vec2::new(-3.0, 0.0));
        assert_eq!(resolved[0].side, Some(TouchSide::Left));
        assert_eq!(position(&world, stuck), m::Vec2::new(-3.0, 0.0));

        // no longer overlapping after the push
        assert!(detect_and_resolve(&mut world, &CollisionResolver::default()).is_empty());
    }

    #[test]
    fn moving_out_of_an_overlap_is_pushed_out() {
        let mut world = hecs::World::new();
        let stuck = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::zero(), m::Vec2::new(1.0, 0.0)),
            Velocity {
                linear: m::Vec2::new(1.0, 2.0),
            },
        ));
        world.spawn(wall_at(17.0, 5.0));

        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].contact.normal, m::Vec2::zero());
        assert_eq!(resolved[0].correction, m::Vec2::new(-4.0, 0.0));
        assert_eq!(resolved[0].side, Some(TouchSide::Left));
        assert_eq!(position(&world, stuck), m::Vec2::new(-3.0, 0.0));
        assert_eq!(
            world.get::<&Velocity>(stuck).unwrap().linear,
            m::Vec2::new(0.0, 2.0)
        );
    }

    #[test]
    fn later_walls_past_the_first_stop_are_not_reached() {
        let mut world = hecs::World::new();
        let mover = world.spawn((
            square_box(),
            Transform::moving(m::Vec2::zero(), m::Vec2::new(60.0, 0.0)),
        ));
        let near = world.spawn(wall_at(25.0, 0.0));
        let far = world.spawn(wall_at(50.0, 0.0));

        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        itertools::assert_equal(resolved.iter().map(|r| r.event.target), [near]);
        assert!((position(&world, mover).x - 5.0).abs() < 1e-9);
        assert!(world.get::<&CollisionState>(far).is_err());
    }

    #[test]
    fn polygon_pushed_out_along_mtv() {
        let mut world = hecs::World::new();
        let poly = world.spawn((
            square_convex(),
            Transform::from_position(m::Vec2::zero()),
            Velocity {
                linear: m::Vec2::new(4.0, -2.0),
            },
        ));
        world.spawn(wall_at(15.0, 0.0));

        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(resolved.len(), 1);
        assert!((resolved[0].correction - m::Vec2::new(-5.0, 0.0)).mag() < 1e-9);
        assert_eq!(resolved[0].side, Some(TouchSide::Left));
        assert!((position(&world, poly) - m::Vec2::new(-5.0, 0.0)).mag() < 1e-9);
        // only the part of the velocity going into the wall is removed
        let vel = world.get::<&Velocity>(poly).unwrap().linear;
        assert!((vel - m::Vec2::new(0.0, -2.0)).mag() < 1e-9);

        // moving away from the contact keeps the velocity
        world.get::<&mut Transform>(poly).unwrap().position = m::Vec2::new(-2.0, 0.0);
        world.get::<&mut Velocity>(poly).unwrap().linear = m::Vec2::new(-4.0, 0.0);
        detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(
            world.get::<&Velocity>(poly).unwrap().linear,
            m::Vec2::new(-4.0, 0.0)
        );
        assert!(position(&world, poly).x <= -5.0 + 1e-9);
    }

    #[test]
    fn box_against_polygon_uses_mtv() {
        let mut world = hecs::World::new();
        let mover = world.spawn((square_box(), Transform::from_position(m::Vec2::zero())));
        world.spawn((
            square_convex().with_passive(true),
            Transform::from_position(m::Vec2::new(0.0, 18.0)),
        ));
        let resolved = detect_and_resolve(&mut world, &CollisionResolver::default());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].side, Some(TouchSide::Top));
        assert!((position(&world, mover) - m::Vec2::new(0.0, -2.0)).mag() < 1e-9);
    }
}
