use crate::utils::Modal;
use tictactoe_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Marked(game::Mark),
    Winning(game::Mark),
}

fn cell_state_at(controller: &game::GameController, slot: game::SlotIndex) -> ViewCellState {
    match controller.cell_at(slot) {
        game::Cell::Empty => ViewCellState::Empty,
        game::Cell::Marked(mark)
            if controller
                .winning_line()
                .is_some_and(|line| line.contains(&slot)) =>
        {
            ViewCellState::Winning(mark)
        }
        game::Cell::Marked(mark) => ViewCellState::Marked(mark),
    }
}

fn cell_classes(cell_state: ViewCellState) -> Classes {
    use ViewCellState::*;

    classes!(
        "cell",
        match cell_state {
            Empty => classes!(),
            Marked(mark) => classes!(mark.css_class()),
            Winning(mark) => classes!(mark.css_class(), "win"),
        }
    )
}

/// Board container classes, carrying the turn hint while the game runs.
fn board_classes(controller: &game::GameController, hover_hint: bool) -> Classes {
    let hint = controller
        .hover_mark()
        .filter(|_| hover_hint)
        .map(game::Mark::css_class);
    classes!("board", hint)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Activate(game::SlotIndex),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    slot: game::SlotIndex,
    cell_state: ViewCellState,
    #[prop_or_default]
    armed: bool,
    callback: Callback<game::SlotIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        slot,
        cell_state,
        armed,
        callback,
    } = props.clone();

    let class = cell_classes(cell_state);

    // consumed slots get no handler at all
    let onclick = armed.then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("slot {} clicked", slot);
            callback.emit(slot);
        })
    });

    html! {
        <div {class} data-cell={slot.to_string()} {onclick}/>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct WinningMessageProps {
    message: Option<AttrValue>,
    onrestart: Callback<MouseEvent>,
}

#[function_component(WinningMessage)]
fn winning_message(props: &WinningMessageProps) -> Html {
    let WinningMessageProps { message, onrestart } = props.clone();
    let class = classes!("winning-message", message.is_some().then_some("show"));

    html! {
        <Modal>
            <div {class}>
                <div class="winning-message-text">{message.as_deref().unwrap_or_default()}</div>
                <button class="restart-button" onclick={onrestart}>{"Restart"}</button>
            </div>
        </Modal>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    #[prop_or(true)]
    pub hover_hint: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::GameController,
}

impl GameView {
    fn activate(&mut self, slot: game::SlotIndex) -> bool {
        match self.controller.handle_cell_activation(slot) {
            Ok(outcome) => {
                log::debug!("slot {}: {:?}", slot, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::error!("activation rejected: {}", err);
                false
            }
        }
    }

    fn restart(&mut self) -> bool {
        let had_moves = self.controller.move_count() > 0;
        self.controller.start();
        had_moves
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: game::GameController::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Activate(slot) => self.activate(slot),
            Restart => {
                log::debug!("restart");
                self.restart()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let controller = &self.controller;
        let class = board_classes(controller, ctx.props().hover_hint);
        let message = controller.result().message().map(AttrValue::from);
        let onrestart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <>
                <div {class}>
                    {
                        for game::iter_slots().map(|slot| {
                            let cell_state = cell_state_at(controller, slot);
                            let armed = controller.is_armed(slot);
                            let callback = ctx.link().callback(Msg::Activate);
                            html! {
                                <CellView key={slot} {slot} {cell_state} {armed} {callback}/>
                            }
                        })
                    }
                </div>
                <WinningMessage {message} {onrestart}/>
            </>
        }
    }
}
