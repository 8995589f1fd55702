//! The component table shipped in the binary
//!
//! Template sources live under `templates/` in the repository and are
//! compiled in with `include_str!`, so the installed binary needs no data
//! files. Registration order here is display order for `veneer list`.

use super::{ComponentDefinition, TemplateStore};

/// Template store backed by the templates compiled into the binary.
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn read(&self, relative: &str) -> Option<&str> {
        embedded(relative)
    }
}

macro_rules! templates {
    ($($name:literal),+ $(,)?) => {
        fn embedded(relative: &str) -> Option<&'static str> {
            match relative {
                $($name => Some(include_str!(concat!("../../templates/", $name))),)+
                _ => None,
            }
        }
    };
}

templates![
    "ui/accordion.tsx",
    "ui/alert.tsx",
    "ui/alert-dialog.tsx",
    "ui/avatar.tsx",
    "ui/badge.tsx",
    "ui/button.tsx",
    "ui/card.tsx",
    "ui/carousel.tsx",
    "ui/checkbox.tsx",
    "ui/dialog.tsx",
    "ui/dropdown-menu.tsx",
    "ui/input.tsx",
    "ui/label.tsx",
    "ui/pagination.tsx",
    "ui/popover.tsx",
    "ui/select.tsx",
    "ui/separator.tsx",
    "ui/skeleton.tsx",
    "ui/switch.tsx",
    "ui/tabs.tsx",
    "ui/textarea.tsx",
    "ui/toast.tsx",
    "ui/use-toast.ts",
    "ui/tooltip.tsx",
];

/// Every component Veneer can install, in display order.
pub fn definitions() -> Vec<ComponentDefinition> {
    vec![
        ComponentDefinition {
            id: "accordion",
            display_name: "Accordion",
            description: "A vertically stacked set of interactive headings that reveal a section of content.",
            package_deps: &["@radix-ui/react-accordion"],
            component_deps: &[],
            files: &["ui/accordion.tsx"],
        },
        ComponentDefinition {
            id: "alert",
            display_name: "Alert",
            description: "Displays a callout for user attention.",
            package_deps: &[],
            component_deps: &[],
            files: &["ui/alert.tsx"],
        },
        ComponentDefinition {
            id: "alert-dialog",
            display_name: "Alert Dialog",
            description: "A modal dialog that interrupts the user with important content.",
            package_deps: &["@radix-ui/react-alert-dialog"],
            component_deps: &["button"],
            files: &["ui/alert-dialog.tsx"],
        },
        ComponentDefinition {
            id: "avatar",
            display_name: "Avatar",
            description: "An image element with a fallback for representing the user.",
            package_deps: &["@radix-ui/react-avatar"],
            component_deps: &[],
            files: &["ui/avatar.tsx"],
        },
        ComponentDefinition {
            id: "badge",
            display_name: "Badge",
            description: "Displays a small count or status descriptor.",
            package_deps: &[],
            component_deps: &[],
            files: &["ui/badge.tsx"],
        },
        ComponentDefinition {
            id: "button",
            display_name: "Button",
            description: "Displays a button or a component that looks like a button.",
            package_deps: &["@radix-ui/react-slot"],
            component_deps: &[],
            files: &["ui/button.tsx"],
        },
        ComponentDefinition {
            id: "card",
            display_name: "Card",
            description: "Displays a card with header, content, and footer.",
            package_deps: &[],
            component_deps: &[],
            files: &["ui/card.tsx"],
        },
        ComponentDefinition {
            id: "carousel",
            display_name: "Carousel",
            description: "A carousel with motion and swipe built using Embla.",
            package_deps: &["embla-carousel-react"],
            component_deps: &["button"],
            files: &["ui/carousel.tsx"],
        },
        ComponentDefinition {
            id: "checkbox",
            display_name: "Checkbox",
            description: "A control that allows the user to toggle between checked and not checked.",
            package_deps: &["@radix-ui/react-checkbox"],
            component_deps: &[],
            files: &["ui/checkbox.tsx"],
        },
        ComponentDefinition {
            id: "dialog",
            display_name: "Dialog",
            description: "A window overlaid on the primary content, rendering it inert.",
            package_deps: &["@radix-ui/react-dialog"],
            component_deps: &[],
            files: &["ui/dialog.tsx"],
        },
        ComponentDefinition {
            id: "dropdown-menu",
            display_name: "Dropdown Menu",
            description: "Displays a menu of actions or functions triggered by a button.",
            package_deps: &["@radix-ui/react-dropdown-menu"],
            component_deps: &[],
            files: &["ui/dropdown-menu.tsx"],
        },
        ComponentDefinition {
            id: "input",
            display_name: "Input",
            description: "Displays a form input field.",
            package_deps: &[],
            component_deps: &[],
            files: &["ui/input.tsx"],
        },
        ComponentDefinition {
            id: "label",
            display_name: "Label",
            description: "Renders an accessible label associated with controls.",
            package_deps: &["@radix-ui/react-label"],
            component_deps: &[],
            files: &["ui/label.tsx"],
        },
        ComponentDefinition {
            id: "pagination",
            display_name: "Pagination",
            description: "Pagination with page navigation, next and previous links.",
            package_deps: &[],
            component_deps: &["button"],
            files: &["ui/pagination.tsx"],
        },
        ComponentDefinition {
            id: "popover",
            display_name: "Popover",
            description: "Displays rich content in a portal, triggered by a button.",
            package_deps: &["@radix-ui/react-popover"],
            component_deps: &[],
            files: &["ui/popover.tsx"],
        },
        ComponentDefinition {
            id: "select",
            display_name: "Select",
            description: "Displays a list of options for the user to pick from.",
            package_deps: &["@radix-ui/react-select"],
            component_deps: &[],
            files: &["ui/select.tsx"],
        },
        ComponentDefinition {
            id: "separator",
            display_name: "Separator",
            description: "Visually or semantically separates content.",
            package_deps: &["@radix-ui/react-separator"],
            component_deps: &[],
            files: &["ui/separator.tsx"],
        },
        ComponentDefinition {
            id: "skeleton",
            display_name: "Skeleton",
            description: "Use to show a placeholder while content is loading.",
            package_deps: &[],
            component_deps: &[],
            files: &["ui/skeleton.tsx"],
        },
        ComponentDefinition {
            id: "switch",
            display_name: "Switch",
            description: "A control that allows the user to toggle between on and off.",
            package_deps: &["@radix-ui/react-switch"],
            component_deps: &[],
            files: &["ui/switch.tsx"],
        },
        ComponentDefinition {
            id: "tabs",
            display_name: "Tabs",
            description: "Layered sections of content displayed one at a time.",
            package_deps: &["@radix-ui/react-tabs"],
            component_deps: &[],
            files: &["ui/tabs.tsx"],
        },
        ComponentDefinition {
            id: "textarea",
            display_name: "Textarea",
            description: "Displays a form textarea field.",
            package_deps: &[],
            component_deps: &[],
            files: &["ui/textarea.tsx"],
        },
        ComponentDefinition {
            id: "toast",
            display_name: "Toast",
            description: "A succinct message that is displayed temporarily.",
            package_deps: &["@radix-ui/react-toast"],
            component_deps: &[],
            files: &["ui/toast.tsx", "ui/use-toast.ts"],
        },
        ComponentDefinition {
            id: "tooltip",
            display_name: "Tooltip",
            description: "A popup that displays information on hover or focus.",
            package_deps: &["@radix-ui/react-tooltip"],
            component_deps: &[],
            files: &["ui/tooltip.tsx"],
        },
    ]
}
