use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: Vec<(&'static str, &'static str)>,
    /// Fired with the index of a question that was just opened.
    #[prop_or_default]
    pub on_open: Callback<usize>,
}

/// Accordion with at most one answer open.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, (question, answer))| {
                let on_toggle = {
                    let open = open.clone();
                    let on_open = props.on_open.clone();
                    Callback::from(move |_: ()| {
                        if *open == Some(index) {
                            open.set(None);
                        } else {
                            open.set(Some(index));
                            on_open.emit(index);
                        }
                    })
                };
                html! {
                    <FaqItem
                        question={*question}
                        answer={*answer}
                        open={*open == Some(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}
