use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::PRESET_AMOUNTS;
use crate::donation::{self, DonationAction, DonationConfigurator, Frequency};
use crate::hooks::use_reveal;

#[function_component(DonateSection)]
pub fn donate_section() -> Html {
    let configurator = use_reducer(DonationConfigurator::new);
    let custom_input = use_state(String::new);
    let custom_invalid = use_state(|| false);
    let heading_revealed = use_reveal("donate-heading");
    let panel_revealed = use_reveal("donate-panel");

    let selection = configurator.selection();

    let on_custom_input = {
        let configurator = configurator.dispatcher();
        let custom_input = custom_input.clone();
        let custom_invalid = custom_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let valid = value.trim().is_empty() || donation::parse_amount(&value).is_ok();
            custom_invalid.set(!valid);
            if !value.trim().is_empty() {
                configurator.dispatch(DonationAction::SelectCustom(value.clone()));
            }
            custom_input.set(value);
        })
    };

    let on_donate = Callback::from(move |_: MouseEvent| {
        // No payment backend; the pledge only goes to the log.
        match serde_json::to_string(&selection) {
            Ok(payload) => info!("donate pressed: {}", payload),
            Err(e) => error!("failed to encode donation: {}", e),
        }
    });

    html! {
        <section id="donate" class="donate-section">
            <div class="donate-glow"></div>
            <div class="donate-inner">
                <h2 id="donate-heading" class={classes!("donate-title", "reveal-up", heading_revealed.then(|| "revealed"))}>
                    {"Make Your Impact Felt"}
                </h2>

                <div id="donate-panel" class={classes!("donate-panel", "reveal-scale", panel_revealed.then(|| "revealed"))}>
                    <div class="frequency-toggle">
                        { for Frequency::ALL.iter().map(|frequency| {
                            let frequency = *frequency;
                            let onclick = {
                                let configurator = configurator.dispatcher();
                                Callback::from(move |_: MouseEvent| {
                                    configurator.dispatch(DonationAction::SelectFrequency(frequency));
                                })
                            };
                            html! {
                                <button
                                    key={frequency.as_str()}
                                    class={classes!("frequency-option", (selection.frequency == frequency).then(|| "active"))}
                                    {onclick}
                                >
                                    {frequency.label()}
                                </button>
                            }
                        }) }
                    </div>

                    <div class="amount-grid">
                        { for PRESET_AMOUNTS.iter().map(|amount| {
                            let amount = *amount;
                            let onclick = {
                                let configurator = configurator.dispatcher();
                                let custom_input = custom_input.clone();
                                let custom_invalid = custom_invalid.clone();
                                Callback::from(move |_: MouseEvent| {
                                    custom_input.set(String::new());
                                    custom_invalid.set(false);
                                    configurator.dispatch(DonationAction::SelectAmount(amount as i64));
                                })
                            };
                            html! {
                                <button
                                    key={amount.to_string()}
                                    class={classes!("amount-option", (selection.amount == amount).then(|| "active"))}
                                    {onclick}
                                >
                                    {format!("${}", amount)}
                                </button>
                            }
                        }) }
                    </div>

                    <label class="custom-amount">
                        <span>{"Other amount"}</span>
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="$"
                            class={classes!(
                                (*custom_invalid).then(|| "invalid"),
                                (!donation::is_preset(selection.amount)).then(|| "active"),
                            )}
                            value={(*custom_input).clone()}
                            oninput={on_custom_input}
                        />
                    </label>

                    <div class="impact-box" title={configurator.impact_statement()}>
                        <h4>
                            <span class="impact-check">{"✓"}</span>
                            {donation::impact_headline(&selection)}
                        </h4>
                        <p>{donation::impact_detail(&selection)}</p>
                    </div>

                    <button class="donate-button" onclick={on_donate}>
                        {configurator.button_label()}
                    </button>
                </div>
            </div>
        </section>
    }
}
