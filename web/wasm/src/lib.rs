use bjcoach::{
    Advice, BustProbability, Card, DealerHand, Feedback, Outcome, Phase, Recommendation,
    RoundResult, Suit, Table, TableOptions, Tally,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTrainer {
    table: Table<Tally>,
}

#[wasm_bindgen]
impl WasmTrainer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Table::new(TableOptions::default(), seed as u64, Tally::new()),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.table = Table::new(TableOptions::default(), seed as u64, Tally::new());
    }

    pub fn start_round(&mut self) -> Result<(), JsValue> {
        self.table.start().map(|_| ()).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.table.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.table.stand().map(|_| ()).map_err(js_err)
    }

    pub fn submit_quiz_answer(&mut self, choice: &str) -> Result<bool, JsValue> {
        let choice = match choice {
            "draw" => Recommendation::Draw,
            "stop" => Recommendation::Stop,
            other => return Err(JsValue::from_str(&format!("unknown answer: {other}"))),
        };
        self.table.submit_quiz_answer(choice).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let player = self.table.player();

        let snapshot = Snapshot {
            phase: phase_to_str(self.table.phase()),
            player: JsHand {
                cards: player.cards().iter().copied().map(card_to_js).collect(),
                value: player.value(),
            },
            dealer: JsDealer::from(self.table.dealer()),
            bust: self.table.bust_probability().map(JsBust::from),
            advice: self.table.advice().map(JsAdvice::from),
            commentary: self.table.commentary().map(|c| c.to_string()),
            result: self.table.result().copied().map(JsRoundResult::from),
            cards_remaining: self.table.remaining() as u32,
        };

        to_js_value(&snapshot)
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        let tally = self.table.stats();
        let stats = JsStats {
            rounds: tally.rounds,
            wins: tally.wins,
            losses: tally.losses,
            pushes: tally.pushes,
            busts: tally.busts,
            quiz_answered: tally.quiz_answered,
            quiz_correct: tally.quiz_correct,
        };
        to_js_value(&stats)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    player: JsHand,
    dealer: JsDealer,
    bust: Option<JsBust>,
    advice: Option<JsAdvice>,
    commentary: Option<String>,
    result: Option<JsRoundResult>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    red: bool,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u8,
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        Self {
            cards: dealer
                .visible_cards()
                .map(|card| card.map(card_to_js))
                .collect(),
            visible_value: dealer.visible_value(),
            hole_revealed: dealer.is_hole_revealed(),
        }
    }
}

#[derive(Serialize)]
struct JsBust {
    busting: u32,
    remaining: u32,
    percent: u8,
}

impl From<BustProbability> for JsBust {
    fn from(odds: BustProbability) -> Self {
        Self {
            busting: odds.busting as u32,
            remaining: odds.remaining as u32,
            percent: odds.percent(),
        }
    }
}

#[derive(Serialize)]
struct JsAdvice {
    recommendation: &'static str,
    rationale: &'static str,
}

impl From<Advice> for JsAdvice {
    fn from(advice: Advice) -> Self {
        Self {
            recommendation: match advice.recommendation {
                Recommendation::Draw => "draw",
                Recommendation::Stop => "stop",
            },
            rationale: advice.rationale.text(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    message: &'static str,
    feedback: &'static str,
    player_value: u8,
    dealer_value: u8,
    natural: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            message: result.outcome.message(),
            feedback: feedback_to_str(result.outcome.feedback()),
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            natural: result.natural,
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    rounds: u32,
    wins: u32,
    losses: u32,
    pushes: u32,
    busts: u32,
    quiz_answered: u32,
    quiz_correct: u32,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank_label(),
        red: card.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "♠",
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWin => "PlayerWin",
        Outcome::PlayerLose => "PlayerLose",
        Outcome::Push => "Push",
    }
}

fn feedback_to_str(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Success => "success",
        Feedback::Warning => "warning",
        Feedback::Error => "error",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
