//! First Come First Served.
//!
//! Services requests strictly by `(arrival_time, order)`. Direction and
//! interception play no part.

use crate::dispatching::rules;
use crate::scheduler::state::EngineState;

pub(crate) fn run(state: &mut EngineState) {
    while !state.is_drained() {
        state.admit();
        match rules::earliest(state.queues.active()) {
            Some(idx) => state.serve(idx, false),
            None => {
                state.idle_until_next_arrival();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{DiskRequest, EventKind};
    use crate::scheduler::{simulate, Policy, SimulationConfig};

    fn config() -> SimulationConfig {
        SimulationConfig::new(50, 0, 199)
    }

    #[test]
    fn test_fcfs_textbook_queue() {
        let reqs = DiskRequest::from_positions(&[82, 170, 43, 140, 24, 16, 190]);
        let result = simulate(Policy::Fcfs, &config(), &reqs).unwrap();
        assert_eq!(result.processing_order, vec![82, 170, 43, 140, 24, 16, 190]);
        // 32 + 88 + 127 + 97 + 116 + 8 + 174.
        // The often quoted 610 does not sum from this path.
        assert_eq!(result.total_movement, 642);
        assert!((result.average_seek - 642.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_orders_by_arrival() {
        let reqs = vec![
            DiskRequest::new(100, 1).with_arrival_time(5.0),
            DiskRequest::new(60, 2).with_arrival_time(0.0),
        ];
        let result = simulate(Policy::Fcfs, &config(), &reqs).unwrap();
        assert_eq!(result.processing_order, vec![60, 100]);
        assert_eq!(result.service_order, vec![2, 1]);
    }

    #[test]
    fn test_fcfs_idles_until_arrival() {
        let reqs = vec![DiskRequest::new(30, 1).with_arrival_time(10.0)];
        let result = simulate(Policy::Fcfs, &config(), &reqs).unwrap();

        assert_eq!(result.trace.len(), 1);
        assert!((result.trace[0].departure_time - 10.0).abs() < 1e-10);
        assert!((result.elapsed_time - 30.0).abs() < 1e-10);
        assert_eq!(result.events[0].kind, EventKind::Idle { until: 10.0 });
    }

    #[test]
    fn test_fcfs_service_time() {
        let cfg = config()
            .with_time_per_cylinder(0.5)
            .with_time_per_request(2.0);
        let reqs = DiskRequest::from_positions(&[60, 40]);
        let result = simulate(Policy::Fcfs, &cfg, &reqs).unwrap();

        // 10 * 0.5 + 2 = 7, then 20 * 0.5 + 2 = 12.
        assert!((result.trace[0].completion_time - 7.0).abs() < 1e-10);
        assert!((result.trace[1].arrival_time - 17.0).abs() < 1e-10);
        assert!((result.elapsed_time - 19.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_ignores_pending_in_path() {
        // 70 lies on the way to 100 and arrives in time, but FCFS never intercepts.
        let reqs = vec![
            DiskRequest::new(100, 1),
            DiskRequest::new(70, 2).with_arrival_time(15.0),
        ];
        let result = simulate(Policy::Fcfs, &config(), &reqs).unwrap();
        assert_eq!(result.processing_order, vec![100, 70]);
        assert_eq!(result.total_movement, 80);
    }
}
