use dioxus::prelude::*;
use store::Region;

/// Dropdown over the fixed region set.
#[component]
pub fn RegionSelect(
    value: Region,
    #[props(default = "".to_string())] class: String,
    onchange: EventHandler<Region>,
) -> Element {
    rsx! {
        select {
            class: "{class}",
            value: "{value.slug()}",
            onchange: move |evt| {
                if let Some(region) = Region::from_slug(&evt.value()) {
                    onchange.call(region);
                }
            },
            for region in Region::ALL {
                option {
                    value: "{region.slug()}",
                    selected: region == value,
                    "{region.label()}"
                }
            }
        }
    }
}
