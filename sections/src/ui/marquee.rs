//! 3D image marquee: a tilted grid of image columns scrolling in alternating
//! directions.

use leptos::prelude::*;

use super::cn;

/// Number of columns the images are spread across.
pub const MARQUEE_COLUMNS: usize = 4;

/// Split `images` into at most `columns` consecutive runs of `ceil(n / columns)`.
///
/// Order is preserved and every image lands in exactly one column. Fewer than
/// `columns` runs come back when there are not enough images to fill them.
pub fn marquee_columns<T: Clone>(images: &[T], columns: usize) -> Vec<Vec<T>> {
    if images.is_empty() || columns == 0 {
        return Vec::new();
    }
    let chunk = images.len().div_ceil(columns);
    images.chunks(chunk).map(<[T]>::to_vec).collect()
}

/// Looping image grid. Renders nothing for an empty image list.
#[component]
pub fn ThreeDMarquee(
    images: Vec<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    if images.is_empty() {
        return view! { "" }.into_any();
    }

    let count = images.len().to_string();
    let columns = marquee_columns(&images, MARQUEE_COLUMNS);

    view! {
        <div class=cn("marquee", class.as_deref()) data-marquee-count=count>
            <div class="marquee-stage">
                <div class="marquee-grid">
                    {columns
                        .into_iter()
                        .enumerate()
                        .map(|(index, column)| {
                            let (direction, seconds) =
                                if index % 2 == 0 { ("down", 10) } else { ("up", 15) };
                            view! {
                                <div
                                    class=format!("marquee-column marquee-{direction}")
                                    style=format!("animation-duration: {seconds}s")
                                >
                                    {column
                                        .into_iter()
                                        .map(|src| view! {
                                            <img
                                                class="marquee-image"
                                                src=src
                                                alt=""
                                                loading="lazy"
                                                width="970"
                                                height="700"
                                            />
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn columns_keep_every_image_once_in_order() {
        let images: Vec<u32> = (0..10).collect();
        let columns = marquee_columns(&images, MARQUEE_COLUMNS);
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0], vec![0, 1, 2]);
        assert_eq!(columns.concat(), images);
    }

    #[test]
    fn sparse_images_fill_fewer_columns() {
        let columns = marquee_columns(&["a", "b", "c", "d", "e"], 4);
        assert_eq!(columns, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
    }

    #[test]
    fn no_images_no_columns() {
        assert!(marquee_columns::<String>(&[], 4).is_empty());
        assert!(marquee_columns(&[1, 2], 0).is_empty());
    }
}
