//! Image Gallery
//!
//! Renders `ul.gallery` with one `li.gallery-item` per hit. Anchors point at
//! the large image and open the lightbox instead of navigating. The first
//! item reports its height so the page can scroll by whole rows.

use dioxus::prelude::*;
use pixseek_core::ImageHit;

use crate::context::use_lightbox;
use crate::surface::DomSurface;

#[component]
pub fn Gallery(surface: DomSurface) -> Element {
    let mut gallery_mounted = surface.gallery_mounted;

    use_drop(move || gallery_mounted.set(false));

    rsx! {
        ul {
            class: "gallery",
            onmounted: move |_| gallery_mounted.set(true),

            for (index, hit) in surface.items.read().iter().enumerate() {
                GalleryCard {
                    key: "{index}-{hit.id}",
                    index: index,
                    hit: hit.clone(),
                    item_height: surface.item_height,
                }
            }
        }
    }
}

#[component]
fn GalleryCard(index: usize, hit: ImageHit, item_height: Signal<Option<f64>>) -> Element {
    let mut lightbox = use_lightbox();
    let mut item_height = item_height;

    rsx! {
        li {
            class: "gallery-item",
            onmounted: move |evt: MountedEvent| async move {
                if index != 0 {
                    return;
                }
                match evt.get_client_rect().await {
                    Ok(rect) => item_height.set(Some(rect.size.height)),
                    Err(e) => tracing::debug!("Could not measure gallery item: {:?}", e),
                }
            },

            a {
                class: "gallery-link",
                href: "{hit.large_image_url}",
                onclick: move |evt| {
                    evt.prevent_default();
                    lightbox.write().open(index);
                },

                img {
                    class: "gallery-image",
                    src: "{hit.webformat_url}",
                    alt: "{hit.tags}",
                    loading: "lazy",
                }

                div { class: "image-info",
                    for (label, value) in hit.stats() {
                        div { class: "info-item",
                            b { "{label}" }
                            p { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
