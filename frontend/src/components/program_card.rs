use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgramCardProps {
    pub title: AttrValue,
    pub icon: AttrValue,
    pub image: AttrValue,
    pub desc: AttrValue,
    /// Set by the stagger group once this card's turn comes.
    #[prop_or_default]
    pub revealed: bool,
}

#[function_component(ProgramCard)]
pub fn program_card(props: &ProgramCardProps) -> Html {
    html! {
        <div class={classes!("program-card", "reveal-up", props.revealed.then(|| "revealed"))}>
            <div class="program-shade"></div>
            <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
            <div class="program-body">
                <div class="program-icon">{props.icon.clone()}</div>
                <h3>{props.title.clone()}</h3>
                <p>{props.desc.clone()}</p>
            </div>
        </div>
    }
}
