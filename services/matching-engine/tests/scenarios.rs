//! Order book scenario tests
//!
//! Runs the same scenarios against both side-index backings: a six-order
//! seed book, a sweep from each side, insertion between levels, and
//! cancellation down to an empty side.

use matching_engine::book::{PriceLevel, SideIndex, TreeSide, VecSide};
use matching_engine::MatchingEngine;
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity, Volume};
use types::order::Side;
use types::trade::Fill;

fn px(value: &str) -> Price {
    value.parse().unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// B1@1x11, B2@2x12, B3@3x13, A4@4x14, A5@5x15, A6@6x16
fn seeded<S: SideIndex>() -> MatchingEngine<S> {
    init_tracing();
    let mut engine = MatchingEngine::<S>::new();
    let seed = [
        (1u64, "B", "1", 11u64),
        (2, "B", "2", 12),
        (3, "B", "3", 13),
        (4, "A", "4", 14),
        (5, "A", "5", 15),
        (6, "A", "6", 16),
    ];
    for (id, side, price, size) in seed {
        let fills = engine.add(id, side, px(price), size).unwrap();
        assert!(fills.is_empty(), "seed order {id} should not trade");
    }
    engine
}

fn bid_prices<S: SideIndex>(engine: &MatchingEngine<S>) -> Vec<Price> {
    engine.bids().map(PriceLevel::price).collect()
}

fn ask_prices<S: SideIndex>(engine: &MatchingEngine<S>) -> Vec<Price> {
    engine.asks().map(PriceLevel::price).collect()
}

fn fill_triples(fills: &[Fill]) -> Vec<(u64, Price, u64)> {
    fills
        .iter()
        .map(|f| (f.order_id.value(), f.price, f.size.value()))
        .collect()
}

fn seed_book_has_no_crossing<S: SideIndex>() {
    let engine = seeded::<S>();

    assert_eq!(bid_prices(&engine), vec![px("3"), px("2"), px("1")]);
    assert_eq!(ask_prices(&engine), vec![px("4"), px("5"), px("6")]);
    assert_eq!(engine.order_count(), 6);
    assert!(!engine.is_crossed());

    let aggregates: Vec<u128> = engine.bids().map(|l| l.total_quantity().value()).collect();
    assert_eq!(aggregates, vec![13, 12, 11]);
}

fn incoming_ask_sweeps_bids<S: SideIndex>() {
    let mut engine = seeded::<S>();

    let fills = engine.add(7u64, "A", px("2"), 20u64).unwrap();

    assert_eq!(
        fill_triples(&fills),
        vec![
            (7, px("3"), 13),
            (3, px("3"), 13),
            (7, px("2"), 7),
            (2, px("2"), 7),
        ]
    );
    assert!(fills.iter().all(|f| f.side == Side::Ask));

    assert_eq!(bid_prices(&engine), vec![px("2"), px("1")]);
    assert_eq!(engine.order(2u64).map(|o| o.size), Some(Quantity::new(5)));
    assert_eq!(engine.order(1u64).map(|o| o.size), Some(Quantity::new(11)));
    assert!(engine.order(3u64).is_none());
    // Incoming order was fully consumed and never rested
    assert!(engine.order(7u64).is_none());
    assert_eq!(ask_prices(&engine), vec![px("4"), px("5"), px("6")]);
}

fn incoming_bid_sweeps_asks<S: SideIndex>() {
    let mut engine = seeded::<S>();

    let fills = engine.add(7u64, "B", px("5"), 20u64).unwrap();

    assert_eq!(
        fill_triples(&fills),
        vec![
            (7, px("4"), 14),
            (4, px("4"), 14),
            (7, px("5"), 6),
            (5, px("5"), 6),
        ]
    );
    assert_eq!(engine.order(5u64).map(|o| o.size), Some(Quantity::new(9)));
    assert_eq!(ask_prices(&engine), vec![px("5"), px("6")]);
    assert_eq!(bid_prices(&engine), vec![px("3"), px("2"), px("1")]);
}

fn incoming_remainder_rests_at_limit<S: SideIndex>() {
    let mut engine = seeded::<S>();

    // Takes all of 4 and 5, then rests 1 at 5.5
    let fills = engine.add(7u64, "B", px("5.5"), 30u64).unwrap();

    assert_eq!(fills.len(), 4);
    assert_eq!(engine.best_bid(), Some((px("5.5"), Volume::new(1))));
    assert_eq!(engine.best_ask(), Some((px("6"), Volume::new(16))));
    assert!(!engine.is_crossed());
}

fn cancel_best_bid_removes_level<S: SideIndex>() {
    let mut engine = seeded::<S>();

    assert!(engine.cancel(3u64));
    assert_eq!(bid_prices(&engine), vec![px("2"), px("1")]);
    assert!(!engine.cancel(3u64));
}

fn cancel_walks_bids_to_empty<S: SideIndex>() {
    let mut engine = seeded::<S>();
    assert!(!engine.cancel(7u64));

    assert!(engine.cancel(3u64));
    assert_eq!(engine.best_bid().map(|(p, _)| p), Some(px("2")));
    assert!(engine.cancel(2u64));
    assert_eq!(engine.best_bid().map(|(p, _)| p), Some(px("1")));
    assert!(engine.cancel(1u64));
    assert_eq!(engine.level_count(Side::Bid), 0);
    assert_eq!(engine.level_count(Side::Ask), 3);
}

fn cancel_walks_asks_to_empty<S: SideIndex>() {
    let mut engine = seeded::<S>();

    assert!(engine.cancel(4u64));
    assert_eq!(engine.best_ask().map(|(p, _)| p), Some(px("5")));
    assert!(engine.cancel(5u64));
    assert_eq!(engine.best_ask().map(|(p, _)| p), Some(px("6")));
    assert!(engine.cancel(6u64));
    assert_eq!(engine.level_count(Side::Ask), 0);
}

fn add_between_levels<S: SideIndex>() {
    let mut engine = seeded::<S>();

    let fills = engine.add(7u64, "B", px("3.5"), 10u64).unwrap();
    assert!(fills.is_empty());
    assert_eq!(engine.level_count(Side::Bid), 4);
    assert_eq!(engine.best_bid().map(|(p, _)| p), Some(px("3.5")));

    let fills = engine.add(8u64, "A", px("3.75"), 10u64).unwrap();
    assert!(fills.is_empty());
    assert_eq!(engine.level_count(Side::Ask), 4);
    assert_eq!(engine.best_ask().map(|(p, _)| p), Some(px("3.75")));

    let fills = engine.add(9u64, "B", px("1.5"), 1u64).unwrap();
    assert!(fills.is_empty());
    assert_eq!(
        bid_prices(&engine),
        vec![px("3.5"), px("3"), px("2"), px("1.5"), px("1")]
    );
}

fn fifo_within_level<S: SideIndex>() {
    init_tracing();
    let mut engine = MatchingEngine::<S>::new();
    engine.add(1u64, "A", px("10"), 5u64).unwrap();
    engine.add(2u64, "A", px("10"), 5u64).unwrap();
    engine.add(3u64, "A", px("10"), 5u64).unwrap();

    let fills = engine.add(4u64, "B", px("10"), 7u64).unwrap();

    let resting: Vec<u64> = fills.iter().skip(1).step_by(2).map(|f| f.order_id.value()).collect();
    assert_eq!(resting, vec![1, 2]);
    assert!(engine.order(1u64).is_none());
    assert_eq!(engine.order(2u64).map(|o| o.size), Some(Quantity::new(3)));

    let level: Vec<u64> = engine
        .asks()
        .next()
        .unwrap()
        .orders()
        .map(|o| o.order_id.value())
        .collect();
    assert_eq!(level, vec![2, 3]);
}

fn cancel_keeps_queue_order<S: SideIndex>() {
    init_tracing();
    let mut engine = MatchingEngine::<S>::new();
    for id in 1u64..=4 {
        engine.add(id, "B", px("7"), 1u64).unwrap();
    }

    assert!(engine.cancel(2u64));
    let fills = engine.add(9u64, "A", px("7"), 2u64).unwrap();

    let resting: Vec<u64> = fills.iter().skip(1).step_by(2).map(|f| f.order_id.value()).collect();
    assert_eq!(resting, vec![1, 3]);
    assert_eq!(engine.order_count(), 1);
    assert!(engine.order(4u64).is_some());
}

fn duplicate_of_resting_id_rejected<S: SideIndex>() {
    let mut engine = seeded::<S>();
    let before = engine.snapshot(usize::MAX);

    let err = engine.add(2u64, "A", px("1"), 100u64).unwrap_err();

    assert_eq!(err, OrderError::DuplicateOrderId { order_id: OrderId::new(2) });
    assert_eq!(engine.snapshot(usize::MAX), before);
}

fn unknown_side_rejected<S: SideIndex>() {
    let mut engine = seeded::<S>();
    let before = engine.snapshot(usize::MAX);

    let err = engine.add(7u64, "X", px("5"), 20u64).unwrap_err();

    assert_eq!(err, OrderError::UnknownSide { token: "X".to_string() });
    assert_eq!(engine.snapshot(usize::MAX), before);
}

fn level_total_exceeds_single_order_max<S: SideIndex>() {
    let mut engine = seeded::<S>();

    engine.add(7u64, "A", px("6"), u64::MAX).unwrap();
    engine.add(8u64, "A", px("6"), 1u64).unwrap();

    let total = u128::from(u64::MAX) + 17;
    assert_eq!(engine.asks().last().map(|l| l.total_quantity().value()), Some(total));

    // Exhausted inside level 6, leaving 45 of order 7 and all of order 8
    let fills = engine.add(9u64, "B", px("6"), u64::MAX).unwrap();
    let taken: u128 = fills.iter().step_by(2).map(|f| u128::from(f.size.value())).sum();
    assert_eq!(taken, u128::from(u64::MAX));
    assert!(engine.order(9u64).is_none());
    assert_eq!(ask_prices(&engine), vec![px("6")]);
    assert_eq!(engine.best_ask().map(|(_, total)| total.value()), Some(46));
    assert_eq!(engine.order(7u64).map(|o| o.size), Some(Quantity::new(45)));
    assert!(!engine.is_crossed());
}

fn snapshot_serializes<S: SideIndex>() {
    let engine = seeded::<S>();

    let json = serde_json::to_value(engine.snapshot(2)).unwrap();

    assert_eq!(json["bids"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["asks"][0]["total_quantity"], 14);
    assert_eq!(json["asks"][0]["order_count"], 1);
}

macro_rules! for_each_backing {
    ($($scenario:ident),* $(,)?) => {
        mod tree {
            $(
                #[test]
                fn $scenario() {
                    super::$scenario::<super::TreeSide>();
                }
            )*
        }

        mod vec {
            $(
                #[test]
                fn $scenario() {
                    super::$scenario::<super::VecSide>();
                }
            )*
        }
    };
}

for_each_backing!(
    seed_book_has_no_crossing,
    incoming_ask_sweeps_bids,
    incoming_bid_sweeps_asks,
    incoming_remainder_rests_at_limit,
    cancel_best_bid_removes_level,
    cancel_walks_bids_to_empty,
    cancel_walks_asks_to_empty,
    add_between_levels,
    fifo_within_level,
    cancel_keeps_queue_order,
    duplicate_of_resting_id_rejected,
    unknown_side_rejected,
    level_total_exceeds_single_order_max,
    snapshot_serializes,
);
