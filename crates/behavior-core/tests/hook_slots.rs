//! Hook slot scenarios: splicing externally-owned subtrees into a host
//! tree at runtime.

use std::sync::{Arc, Mutex};

use behavior_core::builder::{action, hook_point, priority_selector};
use behavior_core::{
    Action, Evaluator, HookGuard, HookHandle, HookRegistry, HookSubtree, Outcome,
};

struct World {
    log: Vec<&'static str>,
}

fn world() -> World {
    World { log: vec![] }
}

#[test]
fn slot_evaluates_like_a_priority_selector() {
    // Two subtrees at priorities 0 and 1; the first fails, the second
    // succeeds. The hook point reports Success, and both subtrees' side
    // effects are observed -- the first was still evaluated.
    let registry = Arc::new(HookRegistry::new());

    let vehicle_combat = HookSubtree::new(Action::new(|world: &mut World| {
        world.log.push("vehicle-combat");
        Outcome::Failure
    }));
    let default_combat = HookSubtree::new(Action::new(|world: &mut World| {
        world.log.push("default-combat");
        Outcome::Success
    }));

    registry
        .insert("combat-main", 0, vehicle_combat)
        .expect("insert");
    registry
        .insert("combat-main", 1, default_combat)
        .expect("insert");

    let mut evaluator = Evaluator::new(hook_point("combat-main", registry));
    let mut world = world();

    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["vehicle-combat", "default-combat"]);
}

#[test]
fn host_tree_provides_the_default_when_slot_is_empty() {
    let registry: Arc<HookRegistry<World>> = Arc::new(HookRegistry::new());

    let mut evaluator = Evaluator::new(priority_selector(vec![
        hook_point("combat-main", Arc::clone(&registry)),
        action(|world: &mut World| {
            world.log.push("built-in");
            Outcome::Success
        }),
    ]));
    let mut world = world();

    // Empty slot: the hook point fails, the built-in branch answers.
    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["built-in"]);

    // A script splices its override in; the slot now wins the selector.
    let guard = HookGuard::insert(
        Arc::clone(&registry),
        "combat-main",
        0,
        HookSubtree::new(Action::new(|world: &mut World| {
            world.log.push("override");
            Outcome::Success
        })),
    )
    .expect("insert");

    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["built-in", "override"]);

    // The script stops; its guard restores the built-in behavior.
    drop(guard);
    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["built-in", "override", "built-in"]);
}

#[test]
fn duplicate_registration_is_rejected_and_removal_is_idempotent() {
    let registry: Arc<HookRegistry<World>> = Arc::new(HookRegistry::new());
    let subtree = HookSubtree::new(Action::new(|_: &mut World| Outcome::Success));

    registry
        .insert("slotA", 0, Arc::clone(&subtree))
        .expect("first insert");
    assert!(registry.insert("slotA", 0, Arc::clone(&subtree)).is_err());

    registry.remove("slotA", &subtree);
    registry.remove("slotA", &subtree); // no-op, not an error
    assert_eq!(registry.slot_len("slotA"), 0);
}

#[test]
fn hook_removing_itself_mid_tick_does_not_disturb_the_scan() {
    // A one-shot hook that deregisters itself during its own evaluation.
    // The scan runs over a snapshot, so the entry after it is still
    // evaluated on this very tick; the registry change shows up next tick.
    let registry = Arc::new(HookRegistry::new());

    let own_handle: Arc<Mutex<Option<HookHandle<World>>>> = Arc::new(Mutex::new(None));
    let one_shot = {
        let registry = Arc::clone(&registry);
        let own_handle = Arc::clone(&own_handle);
        HookSubtree::new(Action::new(move |world: &mut World| {
            world.log.push("one-shot");
            if let Some(handle) = own_handle.lock().expect("handle lock").take() {
                registry.remove_hook(&handle);
            }
            Outcome::Failure
        }))
    };
    let steady = HookSubtree::new(Action::new(|world: &mut World| {
        world.log.push("steady");
        Outcome::Success
    }));

    let handle = registry.insert("death-main", 0, one_shot).expect("insert");
    *own_handle.lock().expect("handle lock") = Some(handle);
    registry.insert("death-main", 1, steady).expect("insert");

    let mut evaluator = Evaluator::new(hook_point("death-main", Arc::clone(&registry)));
    let mut world = world();

    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["one-shot", "steady"]);
    assert_eq!(registry.slot_len("death-main"), 1);

    // Next tick the one-shot is gone.
    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["one-shot", "steady", "steady"]);
}

#[test]
fn priority_order_decides_which_override_wins() {
    let registry = Arc::new(HookRegistry::new());

    let low = HookSubtree::new(Action::new(|world: &mut World| {
        world.log.push("low");
        Outcome::Success
    }));
    let high = HookSubtree::new(Action::new(|world: &mut World| {
        world.log.push("high");
        Outcome::Success
    }));

    // Inserted low-priority first; the priority, not insertion order,
    // decides evaluation order.
    registry.insert("combat-main", 5, low).expect("insert");
    registry.insert("combat-main", 0, high).expect("insert");

    let mut evaluator = Evaluator::new(hook_point("combat-main", registry));
    let mut world = world();

    assert_eq!(evaluator.tick(&mut world), Outcome::Success);
    assert_eq!(world.log, vec!["high"]);
}
