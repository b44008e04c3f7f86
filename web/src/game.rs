use crate::sound::HtmlAudioSounds;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use memomatch_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Banner {
    Won,
    Lost,
    AllComplete,
}

impl Banner {
    fn from_phase(phase: game::Phase) -> Option<Self> {
        use game::Phase::*;
        match phase {
            Playing => None,
            Won => Some(Self::Won),
            Lost => Some(Self::Lost),
            AllLevelsComplete => Some(Self::AllComplete),
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Won | Self::AllComplete => "success",
            Self::Lost => "fail",
        }
    }

    fn text(self, level_label: &str) -> String {
        match self {
            Self::Won => format!("🎉 You Won {}! 🎉", level_label),
            Self::Lost => "⏰ Time’s Up! You Lost!".to_string(),
            Self::AllComplete => "🏆 You Finished All Levels! 🏆".to_string(),
        }
    }
}

fn card_text(face: game::CardFace) -> &'static str {
    face.symbol().map_or("❓", game::Symbol::glyph)
}

fn card_classes(face: game::CardFace) -> Classes {
    use game::CardFace::*;
    classes!(
        "card",
        match face {
            Hidden => classes!(),
            Revealed(_) => classes!("flipped"),
            Matched(_) => classes!("flipped", "matched"),
        }
    )
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::FlipOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::FlipOutcome| outcome.has_update())
    }
}

impl<E> HasUpdate for Result<(), E> {
    fn has_update(self) -> bool {
        self.is_ok()
    }
}

impl<E> HasUpdate for Result<game::AdvanceOutcome, E> {
    fn has_update(self) -> bool {
        self.is_ok()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClick(game::Position),
    FirstInteraction,
    Restart,
    Retry,
    NextLevel,
    Tick(game::Generation),
    ResolveReveal(game::Generation),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    position: game::Position,
    face: game::CardFace,
    callback: Callback<game::Position>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        position,
        face,
        callback,
    } = props.clone();

    let class = card_classes(face);
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", position);
        callback.emit(position);
    });

    html! {
        <div {class} {onclick}>{card_text(face)}</div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    #[arg(skip)]
    #[prop_or_default]
    pub(crate) catalog: game::LevelCatalog,
}

pub(crate) struct GameView {
    controller: game::GameController<HtmlAudioSounds>,
    ticker: Option<(game::Generation, Interval)>,
    pending_reveal: Option<(game::Generation, Timeout)>,
}

impl GameView {
    fn create_ticker(ctx: &Context<Self>, generation: game::Generation) -> Interval {
        let link = ctx.link().clone();
        Interval::new(game::TICK_INTERVAL_MS, move || {
            link.send_message(Msg::Tick(generation))
        })
    }

    fn schedule_reveal(&mut self, ctx: &Context<Self>) {
        let generation = self.controller.generation();
        let link = ctx.link().clone();
        let timeout = Timeout::new(game::REVEAL_DELAY_MS, move || {
            link.send_message(Msg::ResolveReveal(generation))
        });
        self.pending_reveal = Some((generation, timeout));
    }

    /// Drops timers that belong to an earlier level attempt and starts the
    /// countdown once the controller wants it.
    fn sync_timers(&mut self, ctx: &Context<Self>) {
        let generation = self.controller.generation();

        if matches!(self.pending_reveal, Some((issued, _)) if issued != generation) {
            log::debug!("canceling reveal from a previous level");
            self.pending_reveal = None;
        }

        let running = self.controller.timer_running();
        let current = matches!(self.ticker, Some((issued, _)) if issued == generation);
        if !(running && current) {
            self.ticker = running.then(|| (generation, Self::create_ticker(ctx, generation)));
        }
    }

    fn flip_card(&mut self, ctx: &Context<Self>, position: game::Position) -> bool {
        let first_interaction = !self.controller.has_interacted();
        let result = self.controller.flip(position);
        match &result {
            Ok(outcome) => {
                if outcome.needs_resolution() {
                    self.schedule_reveal(ctx);
                }
                log::debug!("flip {}: {:?}", position, outcome);
            }
            Err(err) => log::debug!("flip {} rejected: {}", position, err),
        }
        flip_redraws(&result, first_interaction)
    }
}

/// A rejected flip only needs a redraw when it was the click that unlocked the game.
fn flip_redraws(result: &game::Result<game::FlipOutcome>, first_interaction: bool) -> bool {
    match result {
        Ok(outcome) => outcome.has_update(),
        Err(_) => first_interaction,
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {:#x}", seed);

        Self {
            controller: game::GameController::new(
                props.catalog.clone(),
                HtmlAudioSounds::load(),
                seed,
            ),
            ticker: None,
            pending_reveal: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CardClick(position) => self.flip_card(ctx, position),
            FirstInteraction => {
                let first = !self.controller.has_interacted();
                self.controller.register_interaction();
                first
            }
            Restart => {
                log::debug!("restart from the first level");
                self.controller.restart();
                true
            }
            Retry => self.controller.retry().has_update(),
            NextLevel => self.controller.advance_level().has_update(),
            Tick(generation) => self.controller.tick(generation).has_update(),
            ResolveReveal(generation) => {
                if matches!(self.pending_reveal, Some((issued, _)) if issued == generation) {
                    self.pending_reveal = None;
                }
                self.controller.resolve_reveal(generation).has_update()
            }
        };

        self.sync_timers(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let snapshot = game::Snapshot::from_controller(&self.controller);
        let level_label = snapshot.level_label;

        let overlay = (!snapshot.has_interacted).then(|| {
            let onclick = ctx.link().callback(|_: MouseEvent| FirstInteraction);
            html! {
                <div class="overlay" {onclick}>
                    <h2>{"Click/Tap to Start the Game"}</h2>
                </div>
            }
        });

        let body = match Banner::from_phase(snapshot.phase) {
            None => {
                let callback = ctx.link().callback(CardClick);
                let grid_class = classes!("grid", format!("grid-{}", snapshot.level_id));
                html! {
                    <>
                        if snapshot.timed {
                            <p class="timer">{format!("⏳ Time Left: {}", format_clock(snapshot.time_remaining))}</p>
                        }
                        <p class="progress">{format!("{} / {} pairs", snapshot.matched_pairs, snapshot.total_pairs)}</p>
                        <div class={grid_class}>
                            {
                                for snapshot.faces.iter().enumerate().map(|(position, &face)| {
                                    let callback = callback.clone();
                                    html! { <CardView key={position} {position} {face} {callback}/> }
                                })
                            }
                        </div>
                    </>
                }
            }
            Some(banner) => {
                let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
                let action = match banner {
                    Banner::Won => {
                        let label = if snapshot.has_next_level {
                            "👉 Next Level"
                        } else {
                            "🏆 Finish"
                        };
                        let onclick = ctx.link().callback(|_: MouseEvent| NextLevel);
                        html! { <button class="next-btn" {onclick}>{label}</button> }
                    }
                    Banner::Lost => {
                        let onclick = ctx.link().callback(|_: MouseEvent| Retry);
                        html! {
                            <button class="next-btn" {onclick}>{format!("🔁 Retry {}", level_label)}</button>
                        }
                    }
                    Banner::AllComplete => html! {},
                };
                html! {
                    <div class="game-over">
                        <h2 class={banner.class()}>{banner.text(level_label)}</h2>
                        {action}
                        <button class="restart-btn" onclick={cb_restart}>{"🔄 Restart from Easy"}</button>
                    </div>
                }
            }
        };

        html! {
            <div class="app">
                {for overlay}
                <h1>{"🧠 Memory Match"}</h1>
                <h2>{format!("{} ({}/{})", level_label, snapshot.level_index + 1, snapshot.level_count)}</h2>
                {body}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOG: game::Symbol = game::Symbol::new("🐶");
    const CAT: game::Symbol = game::Symbol::new("🐱");
    const COW: game::Symbol = game::Symbol::new("🐮");

    #[test]
    fn hidden_cards_show_a_question_mark() {
        assert_eq!(card_text(game::CardFace::Hidden), "❓");
        assert_eq!(card_text(game::CardFace::Revealed(DOG)), "🐶");
        assert_eq!(card_text(game::CardFace::Matched(DOG)), "🐶");
    }

    #[test]
    fn face_up_cards_get_the_flipped_class() {
        assert_eq!(card_classes(game::CardFace::Hidden), classes!("card"));
        assert_eq!(
            card_classes(game::CardFace::Matched(DOG)),
            classes!("card", "flipped", "matched")
        );
    }

    #[test]
    fn banner_follows_phase() {
        assert_eq!(Banner::from_phase(game::Phase::Playing), None);
        assert_eq!(Banner::from_phase(game::Phase::Lost), Some(Banner::Lost));
        assert_eq!(
            Banner::from_phase(game::Phase::AllLevelsComplete).map(|b| b.class()),
            Some("success")
        );
        assert_eq!(Banner::Won.text("🐣 Easy"), "🎉 You Won 🐣 Easy! 🎉");
    }

    #[test]
    fn rejected_actions_do_not_trigger_a_redraw() {
        let mut controller = game::GameController::new(game::LevelCatalog::standard(), game::Silent, 1);
        assert!(!controller.retry().has_update());
        assert!(!controller.advance_level().has_update());
        assert!(controller.flip(0).has_update());
        assert!(!controller.flip(0).has_update());
    }

    #[test]
    fn rejected_flip_redraws_only_on_first_interaction() {
        let mut controller = game::GameController::with_deck(
            game::LevelCatalog::standard(),
            game::Silent,
            0,
            game::Deck::from_symbols([DOG, DOG, CAT, CAT, COW, COW]).unwrap(),
            0,
        )
        .unwrap();

        assert!(flip_redraws(&controller.flip(6), true));
        assert!(!flip_redraws(&controller.flip(6), false));

        controller.flip(0).unwrap();
        controller.flip(1).unwrap();
        controller.resolve_reveal(controller.generation());
        controller.flip(2).unwrap();
        controller.flip(3).unwrap();
        controller.resolve_reveal(controller.generation());
        controller.flip(4).unwrap();
        controller.flip(5).unwrap();
        controller.resolve_reveal(controller.generation());
        assert_eq!(controller.phase(), game::Phase::Won);

        let after_win = controller.flip(0);
        assert_eq!(after_win, Err(game::GameError::LevelOver));
        assert!(!flip_redraws(&after_win, false));
    }

    #[test]
    fn url_fragment_flags_parse_into_props() {
        use clap::Parser;

        #[derive(Parser)]
        struct Fragment {
            #[command(flatten)]
            game: GameProps,
        }

        let parsed = Fragment::try_parse_from(["", "--seed=42"]).unwrap();
        assert_eq!(parsed.game.seed, Some(42));
        assert_eq!(parsed.game.catalog, game::LevelCatalog::standard());
    }
}
