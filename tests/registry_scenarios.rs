//! End-to-end scenarios through the public registry API.

use chrono::{DateTime, Duration, Utc};
use crossroads::core::{Clock, Direction, LightState, ManualClock};
use crossroads::interface::{dispatch, Command, Reply, Status};
use crossroads::{LightRegistry, RegistryBuilder, SignalError};
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

fn registry() -> (LightRegistry<Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    (LightRegistry::with_clock(Arc::clone(&clock)), clock)
}

#[test]
fn north_green_blocks_south() {
    let (registry, _) = registry();

    assert_eq!(registry.change_state("NORTH"), Ok(LightState::Green));
    assert_eq!(
        registry.change_state("SOUTH"),
        Err(SignalError::ConflictingGreen {
            direction: Direction::South,
            conflicting: Direction::North,
        })
    );
    assert_eq!(registry.light("SOUTH").unwrap().state, LightState::Red);

    // once NORTH moves on, SOUTH may go
    assert_eq!(registry.change_state("NORTH"), Ok(LightState::Yellow));
    assert_eq!(registry.change_state("SOUTH"), Ok(LightState::Green));
}

#[test]
fn pause_gates_overrides_but_not_cycling() {
    let (registry, _) = registry();
    registry.pause();

    for direction in Direction::ALL {
        let before = registry.light(direction.name()).unwrap();
        assert_eq!(
            registry.set_light_state(direction.name(), LightState::Yellow),
            Err(SignalError::SystemPaused)
        );
        assert_eq!(registry.light(direction.name()).unwrap(), before);
    }

    assert_eq!(registry.change_state("WEST"), Ok(LightState::Yellow));
    assert!(registry.status_snapshot().paused);
}

#[test]
fn history_holds_the_last_hundred_transitions() {
    let (registry, clock) = registry();
    registry.set_light_state("EAST", LightState::Red).unwrap();

    for _ in 0..150 {
        clock.advance(Duration::seconds(2));
        registry.change_state("WEST").unwrap();
    }

    let history = registry.history("WEST", 200).unwrap();
    assert_eq!(history.len(), 100);
    assert!(history
        .windows(2)
        .all(|pair| pair[0].started_at > pair[1].started_at));
    assert!(history.iter().all(|record| record.duration_secs == 2));
}

#[test]
fn replacing_sequence_resets_green_east_to_yellow() {
    let (registry, clock) = registry();
    clock.advance(Duration::seconds(20));

    registry
        .set_light_sequence("EAST", vec![LightState::Yellow])
        .unwrap();

    let east = registry.light("EAST").unwrap();
    assert_eq!(east.state, LightState::Yellow);
    assert_eq!(east.sequence, vec![LightState::Yellow]);
    // the silent reset keeps the old start time
    assert_eq!(east.duration_secs, 20);
    assert!(registry.history("EAST", 10).unwrap().is_empty());

    // a singleton sequence never moves
    assert_eq!(registry.change_state("EAST"), Ok(LightState::Yellow));
    assert!(registry.history("EAST", 10).unwrap().is_empty());
}

#[test]
fn commands_map_errors_to_statuses() {
    let (registry, _) = registry();

    let cases = [
        (
            Command::Light {
                direction: "up".into(),
            },
            Status::NotFound,
        ),
        (
            Command::SetState {
                direction: "east".into(),
                state: "green".into(),
            },
            Status::Forbidden,
        ),
        (
            Command::SetSequence {
                direction: "east".into(),
                sequence: String::new(),
            },
            Status::BadRequest,
        ),
    ];

    for (command, status) in cases {
        assert_eq!(dispatch(&registry, command).unwrap_err().status, status);
    }

    let Reply::Light(view) = dispatch(
        &registry,
        Command::Light {
            direction: "east".into(),
        },
    )
    .unwrap() else {
        panic!("expected light view");
    };
    assert_eq!(view.state, LightState::Green);
}

#[test]
fn builder_config_drives_initial_layout() {
    let registry = RegistryBuilder::new()
        .clock(Arc::new(ManualClock::default()))
        .initial(Direction::East, LightState::Red)
        .initial(Direction::West, LightState::Red)
        .build()
        .unwrap();

    assert!(registry.status_snapshot().green().is_empty());
    assert_eq!(registry.change_state("EAST"), Ok(LightState::Green));
    assert!(registry.change_state("WEST").is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_greens_never_conflict() {
    let registry = Arc::new(LightRegistry::new());
    registry.set_light_state("EAST", LightState::Red).unwrap();
    registry.set_light_state("WEST", LightState::Red).unwrap();

    let mut tasks = Vec::new();
    for direction in Direction::ALL {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::task::spawn_blocking(move || {
            let mut granted = 0;
            for _ in 0..200 {
                if registry
                    .set_light_state(direction.name(), LightState::Green)
                    .is_ok()
                {
                    granted += 1;
                    registry
                        .set_light_state(direction.name(), LightState::Red)
                        .unwrap();
                }
                let _ = registry.change_state(direction.name());
            }
            granted
        }));
    }

    let watcher = {
        let registry = Arc::clone(&registry);
        tokio::task::spawn_blocking(move || {
            for _ in 0..1_000 {
                let green = registry.status_snapshot().green();
                for direction in &green {
                    for other in direction.conflicting() {
                        assert!(!green.contains(other), "{direction} and {other} both green");
                    }
                }
            }
        })
    };

    for task in tasks {
        task.await.unwrap();
    }
    watcher.await.unwrap();

    for (direction, history) in registry.all_histories(200) {
        assert!(
            history
                .windows(2)
                .all(|pair| pair[0].started_at >= pair[1].started_at),
            "{direction} history out of order"
        );
    }
}

/// Manual clock whose next read, once armed, reports that it has read the
/// time and then blocks until released.
struct GatedClock {
    time: ManualClock,
    gate: Mutex<Option<(Sender<()>, Receiver<()>)>>,
}

impl GatedClock {
    fn new() -> Self {
        Self {
            time: ManualClock::default(),
            gate: Mutex::new(None),
        }
    }

    /// Returns (read, release): `read` fires once the gated read has taken
    /// the time, and sending on `release` lets it return.
    fn arm(&self) -> (Receiver<()>, Sender<()>) {
        let (read_tx, read_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        *self.gate.lock() = Some((read_tx, release_rx));
        (read_rx, release_tx)
    }
}

impl Clock for GatedClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.time.now();
        let gate = self.gate.lock().take();
        if let Some((read, release)) = gate {
            read.send(()).unwrap();
            release.recv().unwrap();
        }
        now
    }
}

#[test]
fn stalled_clock_read_cannot_reorder_transitions() {
    let clock = Arc::new(GatedClock::new());
    let registry = LightRegistry::with_clock(Arc::clone(&clock));

    clock.time.advance(Duration::seconds(10));
    let (read, release) = clock.arm();

    thread::scope(|scope| {
        let stalled = scope.spawn(|| registry.change_state("NORTH"));
        read.recv().unwrap();

        // a second caller arrives later while the first is stalled
        clock.time.advance(Duration::seconds(10));
        let later = scope.spawn(|| registry.change_state("NORTH"));

        release.send(()).unwrap();
        assert_eq!(stalled.join().unwrap(), Ok(LightState::Green));
        assert_eq!(later.join().unwrap(), Ok(LightState::Yellow));
    });

    clock.time.advance(Duration::seconds(10));
    registry.change_state("NORTH").unwrap();

    let at = |secs| DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs);
    let history: Vec<_> = registry
        .history("NORTH", 10)
        .unwrap()
        .into_iter()
        .map(|record| (record.state, record.started_at, record.duration_secs))
        .collect();
    assert_eq!(
        history,
        vec![
            (LightState::Yellow, at(20), 10),
            (LightState::Green, at(10), 10),
            (LightState::Red, at(0), 10),
        ]
    );
}
