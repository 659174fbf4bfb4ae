//! Game integration tests.

mod common;

use std::time::Duration;

use bjcli::{
    Choice, Effect, Event, Game, GameOptions, Outcome, Phase, PROMPT, Rank, RoundResult, Suit,
    TITLE, Winner, determine_winner,
};
use common::{card, stacked_game};

fn submit(text: &str) -> Event {
    Event::Submit(text.to_string())
}

fn last_message<S>(game: &Game<S>) -> Option<String> {
    game.messages().iter().last().map(ToString::to_string)
}

#[test]
fn winner_is_decided_by_the_dealer_total_first() {
    assert_eq!(determine_winner(18, 22), Outcome::DealerBust);
    assert_eq!(determine_winner(21, 21), Outcome::DealerBlackjack);
    assert_eq!(determine_winner(20, 21), Outcome::DealerBlackjack);
    assert_eq!(determine_winner(17, 19), Outcome::DealerHigher);
    assert_eq!(determine_winner(20, 18), Outcome::PlayerHigher);
    assert_eq!(determine_winner(19, 19), Outcome::Push);

    assert_eq!(Outcome::DealerBust.winner(), Winner::Player);
    assert_eq!(Outcome::PlayerHigher.winner(), Winner::Player);
    assert_eq!(Outcome::DealerBlackjack.winner(), Winner::Dealer);
    assert_eq!(Outcome::DealerHigher.winner(), Winner::Dealer);
    assert_eq!(Outcome::PlayerBust.winner(), Winner::Dealer);
    assert_eq!(Outcome::Push.winner(), Winner::Tie);
}

#[test]
fn winner_is_total_over_all_standing_totals() {
    for player in 2..=21 {
        for dealer in 17..=26 {
            let outcome = determine_winner(player, dealer);
            let expected = if dealer > 21 {
                Winner::Player
            } else if dealer == 21 || dealer > player {
                Winner::Dealer
            } else if dealer < player {
                Winner::Player
            } else {
                Winner::Tie
            };
            assert_eq!(outcome.winner(), expected, "player {player}, dealer {dealer}");
        }
    }
}

#[test]
fn result_messages() {
    let cases = [
        (RoundResult::player_bust(25, 0), "Bust! You lose!"),
        (RoundResult::showdown(18, 24), "Dealer busts with 24! You win!"),
        (RoundResult::showdown(19, 21), "Dealer has Blackjack! Dealer wins!"),
        (RoundResult::showdown(17, 19), "Dealer wins with 19 vs your 17!"),
        (RoundResult::showdown(20, 18), "You win with 20 vs dealer's 18!"),
        (RoundResult::showdown(18, 18), "It's a tie at 18!"),
    ];
    for (result, message) in cases {
        assert_eq!(result.to_string(), message);
    }
}

#[test]
fn unknown_command_is_reported_without_changing_state() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();

    assert_eq!(game.handle(submit("hit me")), None);
    assert_eq!(game.phase(), Phase::Normal);
    assert_eq!(last_message(&game).as_deref(), Some("Unknown command!"));
    assert!(game.player_hand().is_empty());
}

#[test]
fn draw_command_deals_two_cards_and_opens_the_menu() {
    let mut game = Game::new(GameOptions::default(), 9).unwrap();

    assert_eq!(game.handle(submit("draw")), None);
    assert_eq!(game.player_hand().len(), 2);
    assert!(game.dealer_hand().is_empty());
    assert_eq!(
        game.phase(),
        Phase::AwaitingDrawChoice {
            selected: Choice::Draw
        }
    );
    assert_eq!(game.messages().iter().next(), Some("\nCurrent Game State:"));
    assert_eq!(game.cards_remaining(), 50);
}

#[test]
fn menu_navigation_wraps() {
    let mut game = Game::new(GameOptions::default(), 2).unwrap();
    game.handle(submit("draw"));

    game.handle(Event::SelectPrevious);
    assert_eq!(
        game.phase(),
        Phase::AwaitingDrawChoice {
            selected: Choice::Show
        }
    );
    game.handle(Event::SelectNext);
    assert_eq!(
        game.phase(),
        Phase::AwaitingDrawChoice {
            selected: Choice::Draw
        }
    );

    assert_eq!(Choice::from_index(1), Some(Choice::Show));
    assert_eq!(Choice::Show.index(), 1);
    assert_eq!(Choice::from_index(2), None);
}

#[test]
fn typed_text_is_ignored_while_the_menu_is_open() {
    let mut game = Game::new(GameOptions::default(), 3).unwrap();
    game.handle(submit("draw"));
    let before = game.phase();

    assert_eq!(game.handle(submit("quit")), None);
    assert_eq!(game.phase(), before);
}

#[test]
fn hitting_past_21_ends_the_round_before_the_dealer_plays() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::King, Suit::Diamonds),
    ]);

    game.handle(submit("draw"));
    assert_eq!(game.player_hand().total_value(), 16);

    assert_eq!(game.handle(Event::Confirm), None);
    assert_eq!(game.player_hand().total_value(), 26);
    assert!(game.dealer_hand().is_empty());
    assert_eq!(
        game.phase(),
        Phase::RoundComplete(RoundResult::player_bust(26, 0))
    );
    assert_eq!(last_message(&game).as_deref(), Some("Bust! You lose!"));

    assert_eq!(game.handle(Event::DealerTick), None);
    assert!(game.dealer_hand().is_empty());
}

#[test]
fn hitting_without_busting_keeps_the_menu_open() {
    let mut game = stacked_game(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Diamonds),
    ]);

    game.handle(submit("draw"));
    game.handle(Event::Confirm);

    assert_eq!(game.player_hand().len(), 3);
    assert_eq!(game.player_hand().total_value(), 9);
    assert_eq!(
        game.phase(),
        Phase::AwaitingDrawChoice {
            selected: Choice::Draw
        }
    );
}

#[test]
fn dealer_draws_below_17_and_stops_at_the_first_total_above() {
    let delay = GameOptions::default().dealer_delay;
    let mut game = stacked_game(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    ]);

    game.handle(submit("draw"));
    assert_eq!(game.player_hand().total_value(), 20);

    game.handle(Event::SelectNext);
    assert_eq!(
        game.handle(Event::Confirm),
        Some(Effect::ScheduleDealerTick(delay))
    );
    assert_eq!(game.phase(), Phase::DealerResolving);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.dealer_hand().total_value(), 15);

    assert_eq!(
        game.handle(Event::DealerTick),
        Some(Effect::ScheduleDealerTick(delay))
    );
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.dealer_hand().total_value(), 20);
    assert_eq!(last_message(&game).as_deref(), Some("Dealer's new total: 20"));

    assert_eq!(game.handle(Event::DealerTick), None);
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(
        game.phase(),
        Phase::RoundComplete(RoundResult::showdown(20, 20))
    );
    assert_eq!(last_message(&game).as_deref(), Some("It's a tie at 20!"));

    assert_eq!(game.handle(Event::DealerTick), None);
    assert_eq!(game.dealer_hand().len(), 3);
}

#[test]
fn dealer_standing_on_17_settles_on_the_first_tick() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
    ]);

    game.handle(submit("draw"));
    game.handle(Event::SelectNext);
    game.handle(Event::Confirm);

    assert_eq!(game.handle(Event::DealerTick), None);
    assert_eq!(game.dealer_hand().len(), 2);
    let result = game.phase().result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerHigher);
    assert_eq!(
        last_message(&game).as_deref(),
        Some("You win with 18 vs dealer's 17!")
    );
}

#[test]
fn dealer_bust_pays_the_player() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::King, Suit::Hearts),
    ]);

    game.handle(submit("draw"));
    game.handle(Event::SelectNext);
    game.handle(Event::Confirm);
    assert!(game.handle(Event::DealerTick).is_some());
    assert_eq!(game.handle(Event::DealerTick), None);

    let result = game.phase().result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.dealer_total, 26);
    assert_eq!(
        last_message(&game).as_deref(),
        Some("Dealer busts with 26! You win!")
    );
}

#[test]
fn dealer_21_beats_a_player_21() {
    let mut game = stacked_game(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Six, Suit::Hearts),
    ]);

    game.handle(submit("draw"));
    game.handle(Event::SelectNext);
    game.handle(Event::Confirm);
    game.handle(Event::DealerTick);
    game.handle(Event::DealerTick);

    let result = game.phase().result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBlackjack);
    assert_eq!(result.winner(), Winner::Dealer);
}

#[test]
fn commands_during_dealer_turn() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
    ]);

    game.handle(submit("draw"));
    game.handle(Event::SelectNext);
    game.handle(Event::Confirm);

    assert_eq!(game.handle(submit("draw")), None);
    assert_eq!(game.phase(), Phase::DealerResolving);
    assert_eq!(
        last_message(&game).as_deref(),
        Some("The dealer is still playing!")
    );
    assert_eq!(game.player_hand().len(), 2);

    assert_eq!(game.handle(submit("quit")), Some(Effect::Quit));
    assert_eq!(game.phase(), Phase::Closed);
    assert_eq!(game.handle(Event::DealerTick), None);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn interrupt_quits_from_any_phase() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    game.handle(submit("draw"));

    assert_eq!(game.handle(Event::Interrupt), Some(Effect::Quit));
    assert_eq!(game.phase(), Phase::Closed);
    assert_eq!(game.handle(submit("draw")), None);
    assert_eq!(game.render("draw"), vec!["Goodbye!".to_string()]);
}

#[test]
fn next_round_starts_fresh() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
    ]);

    game.handle(submit("draw"));
    game.handle(Event::SelectNext);
    game.handle(Event::Confirm);
    game.handle(Event::DealerTick);
    assert!(matches!(game.phase(), Phase::RoundComplete(_)));

    game.handle(submit("bogus"));
    assert_eq!(last_message(&game).as_deref(), Some("Unknown command!"));

    game.handle(submit("draw"));
    assert_eq!(game.player_hand().len(), 2);
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.messages().iter().next(), Some("\nCurrent Game State:"));
    assert!(!game.messages().iter().any(|line| line == "Unknown command!"));
    assert_eq!(
        game.phase(),
        Phase::AwaitingDrawChoice {
            selected: Choice::Draw
        }
    );
    // The deck carries over between rounds.
    assert_eq!(game.cards_remaining(), 52 - 6);
}

#[test]
fn dealer_policy_holds_for_many_seeds() {
    for seed in 0..200 {
        let mut game = Game::new(GameOptions::default(), seed).unwrap();
        game.handle(submit("draw"));
        game.handle(Event::SelectNext);
        assert!(game.handle(Event::Confirm).is_some());

        let mut ticks = 0;
        loop {
            let before = game.dealer_hand().total_value();
            let cards = game.dealer_hand().len();
            match game.handle(Event::DealerTick) {
                Some(Effect::ScheduleDealerTick(_)) => {
                    assert!(before < 17, "seed {seed}: dealer drew on {before}");
                    assert_eq!(game.dealer_hand().len(), cards + 1);
                }
                Some(Effect::Quit) => panic!("seed {seed}: unexpected quit"),
                None => {
                    assert!(before >= 17, "seed {seed}: dealer stood on {before}");
                    assert_eq!(game.dealer_hand().len(), cards);
                    break;
                }
            }
            ticks += 1;
            assert!(ticks < 12, "seed {seed}: dealer never stood");
        }

        let player = game.player_hand().total_value();
        let dealer = game.dealer_hand().total_value();
        assert_eq!(
            game.phase(),
            Phase::RoundComplete(RoundResult::showdown(player, dealer))
        );
        assert!(game.messages().len() <= 20);
    }
}

#[test]
fn player_bust_never_lets_the_dealer_draw() {
    for seed in 0..100 {
        let mut game = Game::new(GameOptions::default(), seed).unwrap();
        game.handle(submit("draw"));
        while matches!(game.phase(), Phase::AwaitingDrawChoice { .. }) {
            game.handle(Event::Confirm);
        }

        assert!(game.player_hand().total_value() > 21);
        assert!(game.dealer_hand().is_empty());
        assert_eq!(
            game.phase().result().map(|result| result.outcome),
            Some(Outcome::PlayerBust)
        );
    }
}

#[test]
fn message_log_respects_a_small_capacity() {
    let options = GameOptions::default().with_message_capacity(5);
    let mut game = Game::new(options, 11).unwrap();
    game.handle(submit("draw"));

    assert_eq!(game.messages().len(), 5);
    assert_eq!(game.messages().iter().last(), Some("\n=================="));
}

#[test]
fn huge_message_capacity_is_only_a_cap() {
    let options = GameOptions::default().with_message_capacity(usize::MAX);
    let mut game = Game::new(options, 1).unwrap();

    for _ in 0..30 {
        game.handle(submit("nope"));
    }
    assert_eq!(game.messages().len(), 30);
    assert_eq!(game.messages().capacity(), usize::MAX);

    game.handle(submit("draw"));
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn constructors_reject_unplayable_options() {
    use bjcli::OptionsError;

    let empty_log = GameOptions::default().with_message_capacity(0);
    assert_eq!(
        Game::new(empty_log, 1).err(),
        Some(OptionsError::ZeroMessageCapacity)
    );

    let no_pause = GameOptions::default().with_dealer_delay(Duration::ZERO);
    assert_eq!(
        Game::with_shuffler(no_pause, common::Stacked(Vec::new())).err(),
        Some(OptionsError::ZeroDealerDelay)
    );
}

#[test]
fn render_separates_sections_with_blank_rows() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    game.handle(submit("draw"));

    let entries = game.messages().len();
    let lines = game.render("");
    let header = lines.iter().position(|line| line == "Current Game State:").unwrap();
    assert_eq!(lines[header - 1], "");
    let hand = lines.iter().position(|line| line == "Your Hand:").unwrap();
    assert_eq!(lines[hand - 1], "");
    assert_eq!(lines[hand + 1], "----------------");

    // Title, blank, the log entries plus one row per separator, blank, two menu rows.
    assert_eq!(lines.len(), 2 + entries + 3 + 1 + 2);

    game.handle(Event::SelectNext);
    game.handle(Event::Confirm);
    assert_eq!(
        game.handle(Event::DealerTick),
        Some(Effect::ScheduleDealerTick(GameOptions::default().dealer_delay))
    );
    let lines = game.render("");
    let drawing = lines
        .iter()
        .position(|line| line == "Dealer must draw (below 17)...")
        .unwrap();
    assert_eq!(lines[drawing - 1], "");
}

#[test]
fn render_shows_prompt_or_menu() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();

    let lines = game.render("dr");
    assert_eq!(lines[0], TITLE);
    assert_eq!(lines.last().unwrap(), &format!("{PROMPT}dr"));

    game.handle(submit("draw"));
    let lines = game.render("ignored");
    assert_eq!(lines[0], TITLE);
    assert_eq!(&lines[lines.len() - 2..], &["> Draw", "  Show"]);
    assert!(lines.contains(&"Your Hand:".to_string()));

    game.handle(Event::SelectNext);
    let lines = game.render("");
    assert_eq!(&lines[lines.len() - 2..], &["  Draw", "> Show"]);
}

#[test]
fn dealer_delay_comes_from_options() {
    let options = GameOptions::default().with_dealer_delay(Duration::from_millis(40));
    let mut game = Game::new(options, 8).unwrap();
    game.handle(submit("draw"));
    game.handle(Event::SelectNext);

    assert_eq!(
        game.handle(Event::Confirm),
        Some(Effect::ScheduleDealerTick(Duration::from_millis(40)))
    );
}

#[test]
fn commands_parse_exactly() {
    use bjcli::{Command, CommandError};

    for command in [Command::Draw, Command::Quit] {
        assert_eq!(command.keyword().parse::<Command>(), Ok(command));
    }
    assert_eq!(
        "Draw".parse::<Command>(),
        Err(CommandError::Unknown("Draw".to_string()))
    );
    assert_eq!(
        " draw".parse::<Command>(),
        Err(CommandError::Unknown(" draw".to_string()))
    );
}

#[test]
fn options_reject_unplayable_values() {
    use bjcli::OptionsError;

    assert_eq!(GameOptions::default().validate(), Ok(()));
    assert_eq!(
        GameOptions::default().with_message_capacity(0).validate(),
        Err(OptionsError::ZeroMessageCapacity)
    );
    assert_eq!(
        GameOptions::default()
            .with_dealer_delay(Duration::ZERO)
            .validate(),
        Err(OptionsError::ZeroDealerDelay)
    );
}
