/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant_class = match props.variant {
        ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700",
        ButtonVariant::Secondary => "bg-gray-200 text-gray-800 hover:bg-gray-300",
    };

    let disabled_class = if props.disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-pointer"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!("px-4", "py-2", "rounded", "font-sans", variant_class, disabled_class)}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: String,
    #[prop_or_default]
    pub alert_type: AlertType,
}

#[derive(PartialEq, Clone, Default)]
pub enum AlertType {
    #[default]
    Info,
    Error,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let (icon, color_class) = match props.alert_type {
        AlertType::Info => ("fas fa-info-circle", "bg-blue-50 border-blue-500"),
        AlertType::Error => ("fas fa-exclamation-triangle", "bg-red-50 border-red-500"),
    };

    html! {
        <div class={classes!("p-3", "my-2", "rounded", "border-l-4", color_class)}>
            <i class={icon}></i>
            <span class="ml-2">{&props.message}</span>
        </div>
    }
}
