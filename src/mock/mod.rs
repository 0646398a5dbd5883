#[cfg(test)]
pub(crate) mod rng {
    use {
        crate::dice::Die,
        rand::{rngs::mock::StepRng, RngCore},
    };

    // Raw output of start * increment lands on face start + 1 once
    // gen_range(1..=sides) maps it down.
    fn increment(die: Die) -> u64 {
        1 + (u32::MAX / die.sides() as u32) as u64
    }

    pub(crate) fn step_rng(die: Die, start: u64, step: u64) -> impl RngCore {
        let increment = increment(die);
        StepRng::new(start * increment, increment * step)
    }

    pub(crate) fn rng(die: Die, start: u64) -> impl RngCore {
        step_rng(die, start, 1)
    }

    mod test {
        use {super::*, crate::dice::Die};

        #[test]
        fn check_rng_cycles_through_faces() {
            let die = Die::new(6);
            let mut rng = rng(die, 0);

            for expected in 1..=6 {
                assert_eq!(die.roll(&mut rng), expected);
            }
        }

        #[test]
        fn check_rng_start_offset() {
            let die = Die::new(6);
            let mut rng = rng(die, 3);

            assert_eq!(die.roll(&mut rng), 4);
            assert_eq!(die.roll(&mut rng), 5);
            assert_eq!(die.roll(&mut rng), 6);
        }

        #[test]
        fn check_step_rng_skips() {
            let die = Die::new(6);
            let mut rng = step_rng(die, 0, 2);

            assert_eq!(die.roll(&mut rng), 1);
            assert_eq!(die.roll(&mut rng), 3);
            assert_eq!(die.roll(&mut rng), 5);
        }
    }
}
