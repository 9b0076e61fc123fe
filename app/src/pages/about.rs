use badgrid_api::prelude::*;
use dioxus::prelude::*;

use crate::components::format_tokens;
use crate::route::Route;

#[component]
pub fn About() -> Element {
    let ticket_price = format_tokens(TICKET_PRICE);

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            // Hero
            h1 { class: "text-5xl font-bold mb-6",
                span { class: "text-gold", "{crate::TOKEN_SYMBOL}" }
                span { class: "text-gray-100", " GRID" }
            }

            p { class: "text-xl text-gray-400 mb-8 max-w-2xl mx-auto",
                "The token lottery grid. Each ticket costs "
                "{ticket_price} {crate::TOKEN_SYMBOL}; half of every "
                "purchase goes to the prize pool and half is burnt forever."
            }

            div { class: "flex justify-center gap-4 mb-16",
                Link {
                    to: Route::Grid {},
                    class: "btn btn-primary text-lg px-8 py-3",
                    "Open the Grid"
                }
            }

            // How it works
            div { class: "grid md:grid-cols-3 gap-8 mt-16",
                FeatureCard {
                    title: "Pick",
                    description: "Choose any of the 100 numbered tickets still open on the grid.",
                    icon: "🎟",
                }
                FeatureCard {
                    title: "Purchase",
                    description: "Pay in tokens only - gas fees are fronted by the site wallet.",
                    icon: "⚡",
                }
                FeatureCard {
                    title: "Win",
                    description: "One number is drawn; its owner takes the whole prize pool.",
                    icon: "🏆",
                }
            }

            // Split breakdown
            div { class: "mt-16 card max-w-xl mx-auto",
                h3 { class: "text-xl font-semibold text-gold mb-4", "Where Your Tokens Go" }
                div { class: "text-left space-y-2 text-gray-300",
                    p {
                        span { class: "text-gray-500", "Ticket price: " }
                        "{ticket_price} {crate::TOKEN_SYMBOL}"
                    }
                    p {
                        span { class: "text-gray-500", "Prize pool: " }
                        "50% of every purchase"
                    }
                    p {
                        span { class: "text-gray-500", "Burnt: " }
                        "50% of every purchase, removed from circulation"
                    }
                    p {
                        span { class: "text-gray-500", "Draws: " }
                        "scheduled by the operator; the grid resets after each draw"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "card text-center",
            div { class: "text-4xl mb-4", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-gold mb-2", "{props.title}" }
            p { class: "text-gray-400", "{props.description}" }
        }
    }
}
