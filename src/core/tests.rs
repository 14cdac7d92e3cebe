#[cfg(test)]
mod tests {
    use crate::core::content::{HERO_STATS, StatFormat};
    use crate::core::count_up::testing::MockScheduler;
    use crate::core::pricing::{Billing, PLANS};
    use crate::core::{CountUp, CountUpOptions, Phase};

    /// Drive every pending frame at a fixed refresh interval until the run settles
    fn run_to_completion(
        run: &mut CountUp<MockScheduler>,
        scheduler: &MockScheduler,
        frame_ms: f64,
        from_ms: f64,
    ) -> Vec<i64> {
        let mut values = Vec::new();
        let mut frame = 0.0;
        while scheduler.fire() {
            values.push(run.on_frame(from_ms + frame * frame_ms));
            frame += 1.0;
        }
        values
    }

    #[test]
    fn test_hero_counters_end_on_their_display_text() {
        let options = CountUpOptions::default();

        for stat in HERO_STATS {
            let scheduler = MockScheduler::new();
            let mut run = CountUp::new(options.params(stat.target), scheduler.clone());
            run.on_visible(0.0);
            run_to_completion(&mut run, &scheduler, 16.0, 0.0);

            assert!(run.is_done());
            assert_eq!(stat.format.render(run.value()), stat.format.render(stat.target));
            assert_eq!(scheduler.outstanding(), 0);
        }
    }

    #[test]
    fn test_visitor_counter_text_during_run() {
        let stat = HERO_STATS[0];
        assert_eq!(stat.format, StatFormat::Grouped);

        let scheduler = MockScheduler::new();
        let mut run = CountUp::new(
            CountUpOptions::default().params(stat.target),
            scheduler.clone(),
        );
        assert_eq!(stat.format.render(run.value()), "0");

        run.on_visible(100.0);
        assert!(scheduler.fire());
        run.on_frame(700.0);
        assert_eq!(stat.format.render(run.value()), "1,169");
    }

    #[test]
    fn test_sixty_hz_run_is_monotonic_and_finishes_on_time() {
        let scheduler = MockScheduler::new();
        let mut run = CountUp::new(CountUpOptions::default().params(1247), scheduler.clone());
        run.on_visible(0.0);

        let values = run_to_completion(&mut run, &scheduler, 1000.0 / 60.0, 0.0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&1247));
        // 1.2s at 60Hz, plus the frame at t=0
        assert_eq!(values.len(), 73);
    }

    #[test]
    fn test_teardown_at_300ms_leaves_nothing_scheduled() {
        let scheduler = MockScheduler::new();
        let mut run = CountUp::new(CountUpOptions::default().params(1247), scheduler.clone());
        run.on_visible(0.0);

        let mut t = 0.0;
        while t < 300.0 {
            assert!(scheduler.fire());
            run.on_frame(t);
            t += 16.0;
        }
        assert!(matches!(run.phase(), Phase::Running { .. }));
        assert_eq!(scheduler.outstanding(), 1);

        drop(run);
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[test]
    fn test_price_binding_restarts_only_on_billing_change() {
        let options = CountUpOptions::default();
        let pro = PLANS[1];
        let monthly = i64::from(pro.price(Billing::Monthly).amount().unwrap_or_default());
        let annual = i64::from(pro.price(Billing::Annual).amount().unwrap_or_default());
        assert_ne!(monthly, annual);

        let scheduler = MockScheduler::new();
        let mut run = CountUp::new(options.params(monthly), scheduler.clone());

        // First sync on mount carries the same target
        assert!(!run.retarget(options.params(monthly), 0.0));
        assert_eq!(run.phase(), Phase::Idle);
        assert_eq!(scheduler.requested(), 0);

        run.on_visible(10.0);
        run_to_completion(&mut run, &scheduler, 16.0, 26.0);
        assert_eq!(run.value(), monthly);

        // Toggling billing later restarts the count toward the new price
        assert!(run.retarget(options.params(annual), 5000.0));
        assert_eq!(run.value(), 0);
        assert_eq!(run.phase(), Phase::Running { started_at: 5000.0 });
        run_to_completion(&mut run, &scheduler, 16.0, 5016.0);
        assert_eq!(run.value(), annual);

        // Re-sending the current billing is not a change
        assert!(!run.retarget(options.params(annual), 9000.0));
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[test]
    fn test_billing_switch_reanimates_price() {
        let options = CountUpOptions::default();
        let starter = PLANS[0];
        let monthly = i64::from(starter.price(Billing::Monthly).amount().unwrap_or_default());
        let annual = i64::from(starter.price(Billing::Annual).amount().unwrap_or_default());

        let scheduler = MockScheduler::new();
        let mut run = CountUp::new(options.params(monthly), scheduler.clone());
        run.on_visible(0.0);
        assert!(scheduler.fire());
        run.on_frame(300.0);

        // Toggle mid-run: the in-flight frame is dropped and a new run begins
        run.retarget(options.params(annual), 350.0);
        assert_eq!(scheduler.cancelled(), 1);
        assert_eq!(scheduler.outstanding(), 1);

        run_to_completion(&mut run, &scheduler, 16.0, 350.0);
        assert_eq!(run.value(), annual);
    }
}
