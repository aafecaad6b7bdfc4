use billsplit_cli::{Outcome, OutputFormat, Session};
use billsplit_core::AggregateRoot;

fn run_script(session: &mut Session, script: &str) -> Vec<Outcome> {
    script
        .lines()
        .map(|line| session.handle_line(line).expect("session failed"))
        .collect()
}

fn last_render(outcomes: &[Outcome]) -> &str {
    outcomes
        .iter()
        .rev()
        .find_map(|o| match o {
            Outcome::Render(text) => Some(text.as_str()),
            _ => None,
        })
        .expect("no render produced")
}

#[test]
fn dinner_for_two() {
    let mut session = Session::new(OutputFormat::Text, false);
    let outcomes = run_script(
        &mut session,
        "\
# Friday dinner
person Sam
person Ann
item Sam | Burger | 10.00
item Sam | Fries | 5.00
fee Sam | Delivery | 3.00
item Ann | Salad | 20.00
fee Ann | Service | 0
",
    );

    assert!(outcomes.iter().all(|o| !matches!(o, Outcome::Alert(_))));
    assert_eq!(session.ledger().list_people(), vec!["Sam", "Ann"]);
    assert_eq!(session.ledger().version(), 7);

    let text = last_render(&outcomes);
    let sam = text.find("== Sam ==").unwrap();
    let ann = text.find("== Ann ==").unwrap();
    assert!(sam < ann);
    assert!(text.contains("Items: Burger ($10.00), Fries ($5.00)"));
    assert!(text.contains("TOTAL DUE: $18.75"));
    assert!(text.contains("Fees: Service ($0.00)"));
    assert!(text.contains("TOTAL DUE: $21.00"));
    assert!(text.ends_with("GRAND TOTAL: $39.75\n"));
}

#[test]
fn rejected_lines_never_change_the_ledger() {
    let mut session = Session::new(OutputFormat::Text, false);
    session.handle_line("person Bob").unwrap();
    let before = session.ledger().clone();

    let outcomes = run_script(
        &mut session,
        "\
person
person    
person Bob
item Bob | Pizza | 0
item Bob | Pizza | -3
item Bob | | 4
item Bob | Pizza | ten
item Ghost | Pizza | 10
fee Bob | Tip | -1
fee Bob | Tip
undo
",
    );

    assert_eq!(
        outcomes,
        vec![
            Outcome::Alert("Please enter a person name.".to_string()),
            Outcome::Alert("Please enter a person name.".to_string()),
            Outcome::Alert("Person \"Bob\" is already added!".to_string()),
            Outcome::Alert("Please enter a name and a valid cost greater than zero.".to_string()),
            Outcome::Alert("Please enter a name and a valid cost greater than zero.".to_string()),
            Outcome::Alert("Please enter a name and a valid cost greater than zero.".to_string()),
            Outcome::Alert("Please enter a name and a valid cost greater than zero.".to_string()),
            Outcome::Alert("Person \"Ghost\" has not been added yet.".to_string()),
            Outcome::Alert("Please enter a name and a valid cost.".to_string()),
            Outcome::Alert("Usage: fee <person> | <name> | <cost>".to_string()),
            Outcome::Alert(
                "Unknown command \"undo\". Type `help` for the list of commands.".to_string()
            ),
        ]
    );
    assert_eq!(session.ledger(), &before);
}

#[test]
fn zero_fee_is_allowed() {
    let mut session = Session::new(OutputFormat::Text, false);
    session.handle_line("person Bob").unwrap();
    let outcome = session.handle_line("fee Bob | Service | 0").unwrap();
    match outcome {
        Outcome::Render(text) => assert!(text.contains("Custom Fees: $0.00")),
        other => panic!("expected render, got {other:?}"),
    }
    assert_eq!(session.ledger().fees("Bob").unwrap().len(), 1);
}

#[test]
fn json_output_is_machine_readable() {
    let mut session = Session::new(OutputFormat::Json, true);
    run_script(
        &mut session,
        "person Sam\nitem Sam | Burger | 10\nitem Sam | Fries | 5\nfee Sam | Delivery | 3\n",
    );

    let json: serde_json::Value =
        serde_json::from_str(&session.finish().unwrap().unwrap()).unwrap();
    let breakdown = &json["people"][0]["breakdown"];
    let total = breakdown["total_with_fees"].as_f64().unwrap();
    assert!((total - 18.75).abs() < 1e-9);
    assert_eq!(json["grand_total"]["display"], "$18.75");
}

#[test]
fn empty_session_shows_placeholder() {
    let mut session = Session::new(OutputFormat::Text, false);
    match session.handle_line("show").unwrap() {
        Outcome::Render(text) => {
            assert_eq!(text, "Add a person to begin tracking items and fees.\n")
        }
        other => panic!("expected render, got {other:?}"),
    }
}

#[test]
fn separator_in_person_name_is_refused() {
    let mut session = Session::new(OutputFormat::Text, false);
    let outcomes = run_script(&mut session, "person Tom|Jerry\nperson Tom\nitem Tom | Cake | 4\n");

    assert_eq!(
        outcomes[0],
        Outcome::Alert("Person names cannot contain \"|\".".to_string())
    );
    assert_eq!(session.ledger().list_people(), vec!["Tom"]);
    assert!(last_render(&outcomes).contains("Items: Cake ($4.00)"));
}

#[test]
fn waived_negative_zero_fee_renders_as_zero() {
    let mut session = Session::new(OutputFormat::Text, false);
    let outcomes = run_script(&mut session, "person Bob\nfee Bob | Waived | -0\n");

    let text = last_render(&outcomes);
    assert!(text.contains("Fees: Waived ($0.00)"));
    assert!(!text.contains("-0.00"));
}
