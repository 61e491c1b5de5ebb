use poker_bitpack::{evaluate_cards, parse_cards, Category, Evaluation};

fn eval(s: &str) -> Evaluation {
    evaluate_cards(&parse_cards(s).unwrap())
}

fn packed(category: u32, value: u32, kicker: u32) -> u32 {
    category << 28 | value << 13 | kicker
}

#[test]
fn reference_table() {
    let table = [
        // high card
        ("2h 3c 4d 5s Td Jd Kd", packed(0, 0x0000, 0x0B0C)),
        // one pair
        ("Kh 3h 4h 5h Ad Jd Kd", packed(1, 0x0800, 0x1208)),
        // two pair
        ("Kd 3h 3c 5h Ad Jd Ks", packed(2, 0x0802, 0x1000)),
        ("Kd 3h 3c 5h 5s 2d Ks", packed(2, 0x0808, 0x0002)),
        // three of a kind
        ("3d 4d 6h 3h 9s 3c Td", packed(3, 0x0002, 0x0180)),
        // straight
        ("3d 4d 9h 5h 2d 3c Ad", packed(4, 0x0008, 0x0000)),
        ("3d 4d 6h 5h 2d 3c Ad", packed(4, 0x0010, 0x0000)),
        ("3d 4d 6h 5h 2d 7c Ad", packed(4, 0x0020, 0x0000)),
        ("Td Jd Kh 5h Qd 3c Ad", packed(4, 0x1000, 0x0000)),
        // flush
        ("2h 3h 4h 5h Td Jh Kd", packed(5, 0x020F, 0x0000)),
        ("Kh 3h 4h 5h Ah Jd Kd", packed(5, 0x180E, 0x0000)),
        ("Kd 3h 3d 5d Ad Jd Ks", packed(5, 0x1A0A, 0x0000)),
        ("3d 4d 6d 3h 9d 3c Td", packed(5, 0x0196, 0x0000)),
        ("3d 4d 6d 3h 9d 2d Td", packed(5, 0x0196, 0x0000)),
        ("3d 4d 6d 7d 9d Jd Td", packed(5, 0x03B0, 0x0000)),
        // full house
        ("3d 4d 3h 4h 9s 3c Td", packed(6, 0x0002, 0x0004)),
        ("4s 4d 6h 4h 3s 3c Td", packed(6, 0x0004, 0x0002)),
        ("3d 9d 9h 3h 9s 3c Td", packed(6, 0x0080, 0x0002)),
        // four of a kind
        ("3d 9d 9h 3h 3s 3c Td", packed(7, 0x0002, 0x0100)),
        // straight flush
        ("Ah 2h 3h 4h 5h 9d Td", packed(9, 0x0008, 0x0000)),
        ("Ad 2h 3h Jd Kd Qd Td", packed(9, 0x1000, 0x0000)),
        ("9d 7d 8d Jd Kd Qd Td", packed(9, 0x0800, 0x0000)),
    ];

    for (hand, expected) in table {
        assert_eq!(eval(hand).raw(), expected, "{hand}: got {}", eval(hand));
    }
}

#[test]
fn high_card_keeps_top_five() {
    let e = eval("2h 3c 4d 5s Td Jd Kd");
    assert_eq!(e.category(), Category::HighCard);
    assert_eq!(e.value_mask(), 0);
    // K J T 5 4
    assert_eq!(e.kicker_mask(), 1 << 11 | 1 << 9 | 1 << 8 | 1 << 3 | 1 << 2);
}

#[test]
fn pair_of_kings_with_three_kickers() {
    let e = eval("Kh 3h 4h 5h Ad Jd Kd");
    assert_eq!(e.category(), Category::OnePair);
    assert_eq!(e.value_mask(), 1 << 11);
    assert_eq!(e.kicker_mask(), 1 << 12 | 1 << 9 | 1 << 3);
}

#[test]
fn wheel_is_five_high() {
    let straight = eval("3d 4d 9h 5h 2d 3c Ad");
    assert_eq!(straight.category(), Category::Straight);
    assert_eq!(straight.value_mask(), 1 << 3);
    assert_eq!(straight.kicker_mask(), 0);

    let steel = eval("Ah 2h 3h 4h 5h 9d Td");
    assert_eq!(steel.category(), Category::StraightFlush);
    assert_eq!(steel.value_mask(), 1 << 3);

    // Six-high beats the wheel.
    assert!(eval("2c 3d 4h 5s 6c Kd Kh") > straight);
}

#[test]
fn full_house_uses_best_pair() {
    // AAAKKQQ ranks the same as AAAKKQJ.
    assert_eq!(eval("Ah Ad Ac Kh Kd Qh Qd"), eval("Ah Ad Ac Kh Kd Qh Jd"));
    let e = eval("Ah Ad Ac Kh Kd Qh Qd");
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(e.value_mask(), 1 << 12);
    assert_eq!(e.kicker_mask(), 1 << 11);
}

#[test]
fn third_pair_can_be_the_kicker() {
    let e = eval("Kd Kh 7c 7s 5h 5d 2c");
    assert_eq!(e.category(), Category::TwoPair);
    assert_eq!(e.value_mask(), 1 << 11 | 1 << 5);
    assert_eq!(e.kicker_mask(), 1 << 3);
}

#[test]
fn six_card_hands() {
    let e = eval("9h 9c 9d 4s 4h Kc");
    assert_eq!(e.category(), Category::FullHouse);

    let e = eval("Qh Qc 8d 5s 3h 2c");
    assert_eq!(e.category(), Category::OnePair);
    assert_eq!(e.kicker_mask(), 1 << 6 | 1 << 3 | 1 << 1);
}
