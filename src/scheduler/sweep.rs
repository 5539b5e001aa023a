//! Continuous sweep engines: SCAN, C-SCAN, LOOK and C-LOOK.
//!
//! The working set is refreshed before every decision, and every move
//! except a circular jump may be intercepted by a pending request.

use crate::dispatching::{Selection, SweepRule};
use crate::scheduler::state::EngineState;

pub(crate) fn run(state: &mut EngineState, rule: SweepRule) {
    while !state.is_drained() {
        state.admit();
        let context = state.context();
        let Some(selection) = rule.select(&context, state.queues.requests(), state.queues.active())
        else {
            state.idle_until_next_arrival();
            continue;
        };

        match selection {
            Selection::Service(target) => {
                let to = state.queues.request(target).position;
                match state.intercept(to, context.direction) {
                    Some(idx) => state.serve(idx, true),
                    None => state.serve(target, false),
                }
            }
            Selection::Pivot(edge) => match state.intercept(edge, context.direction) {
                // Stopped short of the edge: keep sweeping the same way.
                Some(idx) => state.serve(idx, true),
                None => {
                    state.pivot(edge);
                    if rule.reverses_at_edge() {
                        state.reverse();
                    }
                }
            },
            Selection::Jump(to) => state.jump(to),
            Selection::Reverse => state.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Direction, DiskRequest, EventKind, StepKind};
    use crate::scheduler::{simulate, Policy, SimulationConfig};

    fn textbook() -> Vec<DiskRequest> {
        DiskRequest::from_positions(&[82, 170, 43, 140, 24, 16, 190])
    }

    fn config() -> SimulationConfig {
        SimulationConfig::new(50, 0, 199).with_direction(Direction::Up)
    }

    fn intercept_workload() -> Vec<DiskRequest> {
        vec![
            DiskRequest::new(100, 1),
            DiskRequest::new(70, 2).with_arrival_time(15.0),
        ]
    }

    #[test]
    fn test_scan_textbook_queue() {
        let result = simulate(Policy::Scan, &config(), &textbook()).unwrap();
        assert_eq!(result.processing_order, vec![82, 140, 170, 190, 43, 24, 16]);
        // 140 up to 190, 9 to the edge, 183 back down to 16.
        // The often quoted 299 does not sum from this path.
        assert_eq!(result.total_movement, 332);
        assert_eq!(result.pivot_count(), 1);

        let pivot = result.trace.iter().find(|s| s.kind == StepKind::Pivot).unwrap();
        assert_eq!((pivot.from, pivot.to), (190, 199));
    }

    #[test]
    fn test_scan_reverses_after_pivot() {
        let result = simulate(Policy::Scan, &config(), &textbook()).unwrap();
        assert!(result.events.iter().any(|e| e.kind
            == EventKind::Reversed {
                direction: Direction::Down
            }));
    }

    #[test]
    fn test_scan_downward() {
        let cfg = config().with_direction(Direction::Down);
        let result = simulate(Policy::Scan, &cfg, &textbook()).unwrap();
        assert_eq!(result.processing_order, vec![43, 24, 16, 82, 140, 170, 190]);
        // 50 down to 0, then up to 190.
        assert_eq!(result.total_movement, 50 + 190);
    }

    #[test]
    fn test_scan_at_edge_reverses_without_step() {
        let cfg = SimulationConfig::new(199, 0, 199);
        let reqs = DiskRequest::from_positions(&[100]);
        let result = simulate(Policy::Scan, &cfg, &reqs).unwrap();
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.total_movement, 99);
    }

    #[test]
    fn test_cscan_textbook_queue() {
        let result = simulate(Policy::CScan, &config(), &textbook()).unwrap();
        assert_eq!(result.processing_order, vec![82, 140, 170, 190, 16, 24, 43]);
        // 149 to the edge, 199 jump, 43 back up.
        // The often quoted 400 counts the 9-cylinder edge leg twice.
        assert_eq!(result.total_movement, 391);
        assert_eq!(result.pivot_count(), 1);
        assert_eq!(result.jump_count(), 1);

        let jump = result.trace.iter().find(|s| s.kind == StepKind::Jump).unwrap();
        assert_eq!((jump.from, jump.to, jump.distance), (199, 0, 199));
    }

    #[test]
    fn test_cscan_never_reverses() {
        let result = simulate(Policy::CScan, &config(), &textbook()).unwrap();
        assert!(!result
            .events
            .iter()
            .any(|e| matches!(e.kind, EventKind::Reversed { .. })));
    }

    #[test]
    fn test_cscan_downward() {
        let cfg = config().with_direction(Direction::Down);
        let reqs = DiskRequest::from_positions(&[82, 43, 16]);
        let result = simulate(Policy::CScan, &cfg, &reqs).unwrap();
        assert_eq!(result.processing_order, vec![43, 16, 82]);
        assert_eq!(result.total_movement, 7 + 27 + 16 + 199 + 117);
    }

    #[test]
    fn test_cscan_jump_is_not_intercepted() {
        // Head sits at the far edge; 100 arrives before the jump would pass it.
        let cfg = SimulationConfig::new(199, 0, 199);
        let reqs = vec![
            DiskRequest::new(10, 1),
            DiskRequest::new(100, 2).with_arrival_time(50.0),
        ];
        let result = simulate(Policy::CScan, &cfg, &reqs).unwrap();
        assert_eq!(result.trace[0].kind, StepKind::Jump);
        assert_eq!(result.trace[0].to, 0);
        assert_eq!(result.processing_order, vec![10, 100]);
    }

    #[test]
    fn test_cscan_pivot_intercepted_keeps_direction() {
        // Heading for the edge at 199 from 150; 180 arrives at T=20 (head passes at T=30).
        let cfg = SimulationConfig::new(150, 0, 199);
        let reqs = vec![
            DiskRequest::new(100, 1),
            DiskRequest::new(180, 2).with_arrival_time(20.0),
        ];
        let result = simulate(Policy::CScan, &cfg, &reqs).unwrap();
        assert_eq!(result.processing_order, vec![180, 100]);
        assert!(result.trace[0].is_intercept());

        let legs: Vec<_> = result.trace.iter().map(|s| (s.from, s.to, s.kind.clone())).collect();
        assert_eq!(legs[1], (180, 199, StepKind::Pivot));
        assert_eq!(legs[2], (199, 0, StepKind::Jump));
        // 30 + 19 to the edge, 199 jump, 100 up.
        assert_eq!(result.total_movement, 348);
        assert!(!result
            .events
            .iter()
            .any(|e| matches!(e.kind, EventKind::Reversed { .. })));
    }

    #[test]
    fn test_look_textbook_queue() {
        let result = simulate(Policy::Look, &config(), &textbook()).unwrap();
        assert_eq!(result.processing_order, vec![82, 140, 170, 190, 43, 24, 16]);
        assert_eq!(result.total_movement, 314);
        assert_eq!(result.pivot_count(), 0);
    }

    #[test]
    fn test_clook_textbook_queue() {
        let result = simulate(Policy::CLook, &config(), &textbook()).unwrap();
        assert_eq!(result.processing_order, vec![82, 140, 170, 190, 16, 24, 43]);
        // 140 up, 174 jump to 16, 27 up to 43.
        assert_eq!(result.total_movement, 341);

        let jump = result.trace.iter().find(|s| s.kind == StepKind::Jump).unwrap();
        assert_eq!((jump.from, jump.to), (190, 16));
        // The request under the head after the jump is serviced in place.
        let after = result
            .trace
            .iter()
            .skip_while(|s| s.kind != StepKind::Jump)
            .nth(1)
            .unwrap();
        assert_eq!((after.from, after.to, after.distance), (16, 16, 0));
    }

    #[test]
    fn test_clook_jump_is_not_intercepted() {
        // 100 arrives at T=50, before the jump from 190 to 10 passes it at T=90.
        let cfg = SimulationConfig::new(190, 0, 199);
        let reqs = vec![
            DiskRequest::new(10, 1),
            DiskRequest::new(100, 2).with_arrival_time(50.0),
        ];
        let result = simulate(Policy::CLook, &cfg, &reqs).unwrap();

        let legs: Vec<_> = result.trace.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(legs, vec![(190, 10), (10, 10), (10, 100)]);
        assert_eq!(result.trace[0].kind, StepKind::Jump);
        assert!(result.trace.iter().all(|s| !s.is_intercept()));
        assert_eq!(result.processing_order, vec![10, 100]);
    }

    #[test]
    fn test_clook_downward() {
        let cfg = config().with_direction(Direction::Down);
        let reqs = DiskRequest::from_positions(&[82, 43, 16]);
        let result = simulate(Policy::CLook, &cfg, &reqs).unwrap();
        assert_eq!(result.processing_order, vec![43, 16, 82]);
        assert_eq!(result.total_movement, 7 + 27 + 66);
    }

    #[test]
    fn test_interception_all_sweep_policies() {
        for policy in [Policy::Scan, Policy::CScan, Policy::Look, Policy::CLook] {
            let result = simulate(policy, &config(), &intercept_workload()).unwrap();
            assert_eq!(result.processing_order, vec![70, 100], "{policy}");
            assert!(result.trace[0].is_intercept(), "{policy}");
            assert!((result.trace[0].arrival_time - 20.0).abs() < 1e-10);
            assert_eq!(result.total_movement, 50);
            assert!(result
                .events
                .iter()
                .any(|e| matches!(e.kind, EventKind::Intercepted { order: 2, .. })));
        }
    }

    #[test]
    fn test_late_arrival_does_not_intercept() {
        let reqs = vec![
            DiskRequest::new(100, 1),
            DiskRequest::new(70, 2).with_arrival_time(25.0),
        ];
        let result = simulate(Policy::Look, &config(), &reqs).unwrap();
        assert_eq!(result.processing_order, vec![100, 70]);
        assert!(!result.trace[0].is_intercept());
    }

    #[test]
    fn test_scan_pivot_intercepted_keeps_direction() {
        // Heading for the edge at 199 from 150; 180 arrives at T=20 (head passes at T=30).
        let cfg = SimulationConfig::new(150, 0, 199);
        let reqs = vec![
            DiskRequest::new(100, 1),
            DiskRequest::new(180, 2).with_arrival_time(20.0),
        ];
        let result = simulate(Policy::Scan, &cfg, &reqs).unwrap();
        assert_eq!(result.processing_order, vec![180, 100]);
        assert!(result.trace[0].is_intercept());
        // Then on to the edge and back: 30 + 19 + 99.
        assert_eq!(result.total_movement, 148);
    }

    #[test]
    fn test_look_idles_between_arrivals() {
        let reqs = vec![
            DiskRequest::new(60, 1),
            DiskRequest::new(40, 2).with_arrival_time(100.0),
        ];
        let result = simulate(Policy::Look, &config(), &reqs).unwrap();
        assert_eq!(result.processing_order, vec![60, 40]);
        assert!(result
            .events
            .iter()
            .any(|e| e.kind == EventKind::Idle { until: 100.0 }));
        assert!((result.elapsed_time - 120.0).abs() < 1e-10);
    }
}
