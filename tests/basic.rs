use relsat::{
    config::Config,
    context::{Theory, TheoryState},
    reports::ClauseStatus,
    structures::{literal::Literal, trit::Trit},
    types::err::{self, ErrorKind},
};

mod lifecycle {
    use super::*;

    #[test]
    fn empty_universe() {
        let mut theory = Theory::from_config(Config::default());
        let _p = theory.fresh_symbol("p", 1).unwrap();

        assert_eq!(
            theory.create_tables(0),
            Err(ErrorKind::Table(err::TableError::InvalidUniverseSize))
        );

        // The failure leaves the theory in declaration, and a valid size succeeds.
        assert_eq!(theory.state(), TheoryState::Declaration);
        assert!(theory.create_tables(1).is_ok());
    }

    #[test]
    fn tables_once() {
        let mut theory = Theory::default();
        let _p = theory.fresh_symbol("p", 1).unwrap();
        assert!(theory.create_tables(2).is_ok());

        assert_eq!(
            theory.create_tables(2),
            Err(ErrorKind::State(err::StateError::TablesExist))
        );
    }

    #[test]
    fn structure_closed_after_tables() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();
        assert!(theory.create_tables(2).is_ok());

        assert_eq!(
            theory.fresh_symbol("q", 1),
            Err(ErrorKind::State(err::StateError::TablesExist))
        );
        assert_eq!(
            theory.add_clause(1, vec![Literal::new(p, true, vec![0])]),
            Err(ErrorKind::State(err::StateError::TablesExist))
        );
    }

    #[test]
    fn no_values_before_tables() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();

        assert_eq!(
            theory.set_value(p, &[0], Trit::True),
            Err(ErrorKind::State(err::StateError::NoTables))
        );
        assert_eq!(
            theory.value_of(p, &[0]),
            Err(ErrorKind::State(err::StateError::NoTables))
        );
        assert_eq!(
            theory.propagate(),
            Err(ErrorKind::State(err::StateError::NoTables))
        );
    }

    #[test]
    fn propagation_on_nothing() {
        let mut theory = Theory::default();
        assert!(theory.create_tables(2).is_ok());
        assert_eq!(theory.propagate(), Ok(false));
    }
}

mod declaration {
    use super::*;

    #[test]
    fn empty_clause() {
        let mut theory = Theory::default();
        let _p = theory.fresh_symbol("p", 1).unwrap();

        assert_eq!(
            theory.add_clause(1, vec![]),
            Err(ErrorKind::Build(err::BuildError::EmptyClause))
        );
    }

    #[test]
    fn binding_length() {
        let mut theory = Theory::default();
        let mul = theory.fresh_symbol("mul", 3).unwrap();

        assert_eq!(
            theory.add_clause(2, vec![Literal::new(mul, true, vec![0, 1])]),
            Err(ErrorKind::Build(err::BuildError::InvalidLiteralBinding))
        );
    }

    #[test]
    fn binding_range() {
        let mut theory = Theory::default();
        let mul = theory.fresh_symbol("mul", 3).unwrap();

        assert_eq!(
            theory.add_clause(2, vec![Literal::new(mul, true, vec![0, 1, 2])]),
            Err(ErrorKind::Build(err::BuildError::InvalidLiteralBinding))
        );
    }

    #[test]
    fn unknown_symbol() {
        let mut theory = Theory::default();
        let _p = theory.fresh_symbol("p", 1).unwrap();

        assert_eq!(
            theory.add_clause(1, vec![Literal::new(7, true, vec![0])]),
            Err(ErrorKind::Build(err::BuildError::UnknownSymbol))
        );
    }

    #[test]
    fn rendering() {
        let mut theory = Theory::default();
        let one = theory.fresh_symbol("one", 1).unwrap();
        let mul = theory.fresh_symbol("mul", 3).unwrap();

        let key = theory
            .add_clause(
                2,
                vec![
                    Literal::new(one, false, vec![0]),
                    Literal::new(mul, true, vec![0, 1, 1]),
                ],
            )
            .unwrap();

        assert_eq!(theory.symbol_db.symbol(mul).to_string(), "mul(x0,x1,x2)");
        assert_eq!(
            theory.clause_db.clause(key).as_string(&theory.symbol_db),
            "-one(x0), +mul(x0,x1,x1)"
        );
    }
}

mod seeding {
    use super::*;

    #[test]
    fn contradictory_seeds() {
        let mut theory = Theory::default();
        let mul = theory.fresh_symbol("mul", 3).unwrap();
        assert!(theory.create_tables(2).is_ok());

        assert!(theory.set_value(mul, &[0, 1, 0], Trit::True).is_ok());
        assert_eq!(
            theory.set_value(mul, &[0, 1, 0], Trit::False),
            Err(ErrorKind::Table(err::TableError::SignConflict))
        );
    }

    #[test]
    fn repeated_seed_is_no_conflict() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();
        assert!(theory.create_tables(2).is_ok());

        assert!(theory.set_value(p, &[1], Trit::True).is_ok());
        assert!(theory.set_value(p, &[1], Trit::True).is_ok());
        assert_eq!(theory.value_of(p, &[1]), Ok(Trit::True));
        assert_eq!(theory.value_of(p, &[0]), Ok(Trit::Unknown));
    }

    #[test]
    fn equality_requires_a_binary_symbol() {
        let mut theory = Theory::default();
        let one = theory.fresh_symbol("one", 1).unwrap();
        let equ = theory.fresh_symbol("equ", 2).unwrap();
        assert!(theory.create_tables(3).is_ok());

        assert_eq!(
            theory.set_equality(one),
            Err(ErrorKind::Table(err::TableError::NotBinary))
        );

        assert!(theory.set_equality(equ).is_ok());
        for row in 0..3 {
            for column in 0..3 {
                let expected = match row == column {
                    true => Trit::True,
                    false => Trit::False,
                };
                assert_eq!(theory.value_of(equ, &[row, column]), Ok(expected));
            }
        }
    }

    #[test]
    fn coordinate_checks() {
        let mut theory = Theory::default();
        let equ = theory.fresh_symbol("equ", 2).unwrap();
        assert!(theory.create_tables(2).is_ok());

        assert_eq!(
            theory.value_of(equ, &[0]),
            Err(ErrorKind::Table(err::TableError::ArityMismatch))
        );
        assert_eq!(
            theory.value_of(equ, &[0, 2]),
            Err(ErrorKind::Table(err::TableError::CoordinateOutOfBounds))
        );
    }
}

mod unit_clauses {
    use super::*;

    #[test]
    fn resolved_at_initialization() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();
        let _clause = theory
            .add_clause(1, vec![Literal::new(p, true, vec![0])])
            .unwrap();

        // No call to propagate is needed.
        assert!(theory.create_tables(3).is_ok());
        assert_eq!(theory.table_values(p).unwrap(), &[Trit::True; 3]);
    }

    #[test]
    fn negative_unit() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();
        let _clause = theory
            .add_clause(1, vec![Literal::new(p, false, vec![0])])
            .unwrap();

        assert!(theory.create_tables(2).is_ok());
        assert_eq!(theory.table_values(p).unwrap(), &[Trit::False; 2]);
    }

    #[test]
    fn conflicting_units() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();
        let _positive = theory
            .add_clause(1, vec![Literal::new(p, true, vec![0])])
            .unwrap();
        let _negative = theory
            .add_clause(1, vec![Literal::new(p, false, vec![0])])
            .unwrap();

        assert_eq!(
            theory.create_tables(2),
            Err(ErrorKind::Table(err::TableError::SignConflict))
        );
        assert_eq!(theory.state(), TheoryState::Inconsistent);
    }

    #[test]
    fn diagnosis_after_failed_initialization() {
        let mut theory = Theory::default();
        let p = theory.fresh_symbol("p", 1).unwrap();
        let positive = theory
            .add_clause(1, vec![Literal::new(p, true, vec![0])])
            .unwrap();
        let negative = theory
            .add_clause(1, vec![Literal::new(p, false, vec![0])])
            .unwrap();

        assert!(theory.create_tables(2).is_err());

        // Cell values stay readable, with the first unit's writes in place.
        assert_eq!(theory.table_values(p).unwrap(), &[Trit::True; 2]);
        assert_eq!(theory.clause_status(positive), Ok(ClauseStatus::Satisfied));

        // The conflicting clause was never given views, so its status is an
        // error rather than a panic, and the theory-wide report follows suit.
        assert_eq!(
            theory.clause_status(negative),
            Err(ErrorKind::State(err::StateError::Inconsistent))
        );
        assert_eq!(
            theory.report(),
            Err(ErrorKind::State(err::StateError::Inconsistent))
        );
    }

    #[test]
    fn nullary_unit() {
        let mut theory = Theory::default();
        let sound = theory.fresh_symbol("sound", 0).unwrap();
        let _clause = theory
            .add_clause(0, vec![Literal::new(sound, true, vec![])])
            .unwrap();

        assert!(theory.create_tables(2).is_ok());
        assert_eq!(theory.table_values(sound).unwrap(), &[Trit::True]);
    }
}

mod encoding {
    use super::*;

    #[test]
    fn trit_integer_encoding() {
        for value in [Trit::False, Trit::Unknown, Trit::True] {
            assert_eq!(Trit::from_i8(value.as_i8()), Some(value));
        }
        assert_eq!(Trit::from_i8(2), None);

        // The derived order tracks the integer encoding.
        assert!(Trit::False.as_i8() < Trit::Unknown.as_i8());
        assert!(Trit::Unknown.as_i8() < Trit::True.as_i8());
    }
}
