use relsat::{
    config::Config,
    context::Theory,
    db::{table::RelationTable, view::View},
    structures::{
        binding::{BindingMask, BindingTable},
        literal::Literal,
        trit::Trit,
    },
    types::err::{self, ErrorKind},
};

// Flat index of a binding (x0, x1) over a universe of size 2.
fn at(x0: usize, x1: usize) -> usize {
    x0 * 2 + x1
}

mod coherence {
    use super::*;

    #[test]
    fn write_read_across_permuted_views() {
        let mut table = RelationTable::create(2, 2).unwrap();

        let forward = View::build(&Literal::new(0, true, vec![0, 1]), 2, 2);
        let transposed_negative = View::build(&Literal::new(0, false, vec![1, 0]), 2, 2);

        // Force r(0, 1) through the forward view.
        let mut mask = BindingMask::none(2, 2);
        mask.set(at(0, 1));
        assert_eq!(forward.write_masked(&mut table, &mask, Trit::True), Ok(true));

        assert_eq!(table.get(&[0, 1]), Ok(Trit::True));
        assert_eq!(table.get(&[1, 0]), Ok(Trit::Unknown));

        // The transposed negative view observes the write at the swapped binding, negated.
        let read = transposed_negative.read(&table);
        assert_eq!(read.value(at(1, 0)), Trit::False);
        assert_eq!(read.value(at(0, 1)), Trit::Unknown);
    }

    #[test]
    fn negative_write_flips_the_sign() {
        let mut table = RelationTable::create(1, 2).unwrap();
        let negative = View::build(&Literal::new(0, false, vec![0]), 1, 2);

        let mut mask = BindingMask::none(1, 2);
        mask.set(1);
        assert_eq!(negative.write_masked(&mut table, &mask, Trit::True), Ok(true));

        // Forcing the negative literal true makes the symbol false.
        assert_eq!(table.get(&[1]), Ok(Trit::False));
        assert_eq!(negative.read(&table).value(1), Trit::True);
    }

    #[test]
    fn empty_mask_is_a_no_op() {
        let mut table = RelationTable::create(1, 2).unwrap();
        table.set(&[0], Trit::False).unwrap();

        let view = View::build(&Literal::new(0, true, vec![0]), 1, 2);

        // An all-false mask reports no change, even where a write would conflict.
        let mask = BindingMask::none(1, 2);
        assert_eq!(view.write_masked(&mut table, &mask, Trit::True), Ok(false));
        assert_eq!(table.get(&[0]), Ok(Trit::False));
    }
}

mod diagonal {
    use super::*;

    #[test]
    fn read_collapses_to_the_diagonal() {
        let mut table = RelationTable::create(2, 2).unwrap();
        table.set_equality().unwrap();

        // d(x0, x0) over one variable reads the diagonal only.
        let diagonal = View::build(&Literal::new(0, true, vec![0, 0]), 1, 2);
        let read = diagonal.read(&table);
        assert_eq!(read.value(0), Trit::True);
        assert_eq!(read.value(1), Trit::True);
    }

    #[test]
    fn write_never_touches_off_diagonal_cells() {
        let mut table = RelationTable::create(2, 2).unwrap();
        let diagonal = View::build(&Literal::new(0, true, vec![0, 0]), 1, 2);

        let mask = BindingMask::all(1, 2);
        assert_eq!(diagonal.write_masked(&mut table, &mask, Trit::True), Ok(true));

        assert_eq!(table.get(&[0, 0]), Ok(Trit::True));
        assert_eq!(table.get(&[1, 1]), Ok(Trit::True));
        assert_eq!(table.get(&[0, 1]), Ok(Trit::Unknown));
        assert_eq!(table.get(&[1, 0]), Ok(Trit::Unknown));
    }

    #[test]
    fn forcing_onto_a_false_diagonal_cell_conflicts() {
        // mul(x0, x0, x1) with mul(1, 1, 0) already false: forcing the
        // literal true everywhere must conflict, not skip the cell.
        let mut table = RelationTable::create(3, 2).unwrap();
        table.set(&[1, 1, 0], Trit::False).unwrap();

        let diagonal = View::build(&Literal::new(0, true, vec![0, 0, 1]), 2, 2);
        assert_eq!(
            diagonal.write_masked(&mut table, &BindingMask::all(2, 2), Trit::True),
            Err(err::TableError::SignConflict)
        );

        // The conflicting update wrote nothing.
        assert_eq!(table.get(&[0, 0, 0]), Ok(Trit::Unknown));
    }

    #[test]
    fn overlapping_diagonal_units_conflict() {
        // +mul(x0, x0, x1) forces the (a, a, b) cells true while
        // -mul(x0, x1, x0) forces the (a, b, a) cells false; the two
        // overlap at (a, a, a), and unit resolution meets the conflict.
        let mut theory = Theory::from_config(Config::default());
        let mul = theory.fresh_symbol("mul", 3).unwrap();

        let _positive = theory
            .add_clause(2, vec![Literal::new(mul, true, vec![0, 0, 1])])
            .unwrap();
        let _negative = theory
            .add_clause(2, vec![Literal::new(mul, false, vec![0, 1, 0])])
            .unwrap();

        assert_eq!(
            theory.create_tables(2),
            Err(ErrorKind::Table(err::TableError::SignConflict))
        );
    }
}

mod broadcast {
    use super::*;

    #[test]
    fn unused_variables_repeat_on_read() {
        let mut table = RelationTable::create(1, 2).unwrap();
        table.set(&[0], Trit::True).unwrap();

        // one(x0) under two variables is constant along x1.
        let broadcast = View::build(&Literal::new(0, true, vec![0]), 2, 2);
        let read = broadcast.read(&table);
        assert_eq!(read.value(at(0, 0)), Trit::True);
        assert_eq!(read.value(at(0, 1)), Trit::True);
        assert_eq!(read.value(at(1, 0)), Trit::Unknown);
        assert_eq!(read.value(at(1, 1)), Trit::Unknown);
    }

    #[test]
    fn collapsed_axes_or_reduce_on_write() {
        let mut table = RelationTable::create(1, 2).unwrap();
        let broadcast = View::build(&Literal::new(0, true, vec![0]), 2, 2);

        // A single selected binding forces the cell regardless of the unused variable.
        let mut mask = BindingMask::none(2, 2);
        mask.set(at(1, 0));
        assert_eq!(broadcast.write_masked(&mut table, &mask, Trit::True), Ok(true));

        assert_eq!(table.get(&[1]), Ok(Trit::True));
        assert_eq!(table.get(&[0]), Ok(Trit::Unknown));
    }

    #[test]
    fn nullary_symbols_collapse_to_one_cell() {
        let mut table = RelationTable::create(0, 3).unwrap();
        let view = View::build(&Literal::new(0, true, vec![]), 1, 3);

        let read = view.read(&table);
        assert_eq!(read.len(), 3);
        assert_eq!(read.value(2), Trit::Unknown);

        let mut mask = BindingMask::none(1, 3);
        mask.set(1);
        assert_eq!(view.write_masked(&mut table, &mask, Trit::True), Ok(true));
        assert_eq!(table.values(), &[Trit::True]);
    }
}

mod tables {
    use super::*;

    #[test]
    fn masked_update_is_checked_before_any_write() {
        let mut table = RelationTable::create(1, 3).unwrap();
        table.set(&[2], Trit::False).unwrap();

        // The mask covers an unknown cell and a conflicting cell; nothing is written.
        let mask = [true, false, true];
        assert_eq!(
            table.update_masked(&mask, Trit::True),
            Err(err::TableError::SignConflict)
        );
        assert_eq!(table.values(), &[Trit::Unknown, Trit::Unknown, Trit::False]);
    }

    #[test]
    fn masked_update_reports_progress() {
        let mut table = RelationTable::create(1, 2).unwrap();
        table.set(&[0], Trit::True).unwrap();

        // Only the unknown cell transitions; a second identical update is quiescent.
        assert_eq!(table.update_masked(&[true, true], Trit::True), Ok(true));
        assert_eq!(table.update_masked(&[true, true], Trit::True), Ok(false));
        assert_eq!(table.values(), &[Trit::True, Trit::True]);
    }

    #[test]
    fn mask_shape_is_checked() {
        let mut table = RelationTable::create(2, 2).unwrap();
        assert_eq!(
            table.update_masked(&[true, true], Trit::True),
            Err(err::TableError::MaskShape)
        );
    }

    #[test]
    fn binding_tables_combine_by_maximum() {
        let mut combined = BindingTable::filled(1, 3, Trit::False);
        assert_eq!(combined.min(), Trit::False);

        combined.max_assign(&BindingTable::filled(1, 3, Trit::Unknown));
        assert_eq!(combined.min(), Trit::Unknown);

        combined.max_assign(&BindingTable::filled(1, 3, Trit::True));
        assert_eq!(combined.min(), Trit::True);

        // Disjunction never descends.
        combined.max_assign(&BindingTable::filled(1, 3, Trit::False));
        assert_eq!(combined.min(), Trit::True);
    }
}
