use super::*;

#[test]
fn clamp_page_full_page_unchanged() {
    let page = clamp_page(10, 0, CATALOG_MAX_ID).unwrap();
    assert_eq!(page, PageRequest { limit: 10, offset: 0 });
}

#[test]
fn clamp_page_final_partial_page() {
    let page = clamp_page(10, 870, CATALOG_MAX_ID).unwrap();
    assert_eq!(page.limit, 4);
    assert_eq!(page.offset, 870);
    assert_eq!(page.end(), CATALOG_MAX_ID);
}

#[test]
fn clamp_page_limit_is_min_of_limit_and_remaining() {
    for offset in [0, 100, 860, 864, 865, 873] {
        for limit in [1, 10, 50] {
            let page = clamp_page(limit, offset, CATALOG_MAX_ID).unwrap();
            assert_eq!(page.limit, limit.min(CATALOG_MAX_ID - offset));
        }
    }
}

#[test]
fn clamp_page_past_end_is_empty() {
    assert_eq!(clamp_page(10, 874, CATALOG_MAX_ID), None);
    assert_eq!(clamp_page(10, 900, CATALOG_MAX_ID), None);
}

#[test]
fn clamp_page_zero_limit_is_empty() {
    assert_eq!(clamp_page(0, 0, CATALOG_MAX_ID), None);
}

#[test]
fn page_offset_for_known_ids() {
    assert_eq!(page_offset_for(1, 10, CATALOG_MAX_ID), Some(0));
    assert_eq!(page_offset_for(10, 10, CATALOG_MAX_ID), Some(0));
    assert_eq!(page_offset_for(11, 10, CATALOG_MAX_ID), Some(10));
    assert_eq!(page_offset_for(55, 10, CATALOG_MAX_ID), Some(50));
    assert_eq!(page_offset_for(101, 10, CATALOG_MAX_ID), Some(100));
    assert_eq!(page_offset_for(874, 10, CATALOG_MAX_ID), Some(870));
}

#[test]
fn page_offset_for_out_of_range() {
    assert_eq!(page_offset_for(0, 10, CATALOG_MAX_ID), None);
    assert_eq!(page_offset_for(881, 10, CATALOG_MAX_ID), None);
    assert_eq!(page_offset_for(5, 0, CATALOG_MAX_ID), None);
}

#[test]
fn page_offset_for_id_past_max_on_last_page() {
    // 875 still lands on the page starting at 870; the page fetch decides.
    assert_eq!(page_offset_for(875, 10, CATALOG_MAX_ID), Some(870));
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(CATALOG_MAX_ID, 10), 88);
    assert_eq!(total_pages(870, 10), 87);
    assert_eq!(total_pages(CATALOG_MAX_ID, 0), 0);
}

#[test]
fn page_for_number_clamps_to_last_page() {
    let last = page_for_number(500, 10, CATALOG_MAX_ID).unwrap();
    assert_eq!(last, PageRequest { limit: 4, offset: 870 });

    let third = page_for_number(2, 10, CATALOG_MAX_ID).unwrap();
    assert_eq!(third, PageRequest { limit: 10, offset: 20 });
}
