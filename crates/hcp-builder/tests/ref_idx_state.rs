//! Reference-index state: POC delta clipping, zero fill, and the dummy
//! reference command.

use hcp_builder::generic;
use hcp_builder::params::{PicEntry, RefIdxParams, MAX_REF_FRAMES};
use hcp_cmds::gen12::Gen12;
use hcp_cmds::iface::HcpCommand;
use hcp_cmds::REF_ENTRY_COUNT;

struct RefFixture {
    ref_pic_list: [[PicEntry; MAX_REF_FRAMES]; 2],
    poc_list: [i32; MAX_REF_FRAMES],
    mapping: [i8; MAX_REF_FRAMES],
}

impl RefFixture {
    fn new() -> Self {
        let mut mapping = [-1i8; MAX_REF_FRAMES];
        for (slot, entry) in mapping.iter_mut().enumerate() {
            *entry = slot as i8;
        }
        Self {
            ref_pic_list: [[PicEntry::default(); MAX_REF_FRAMES]; 2],
            poc_list: [0; MAX_REF_FRAMES],
            mapping,
        }
    }

    fn params(&self, num_refs: u8, poc_curr: i32) -> RefIdxParams<'_> {
        RefIdxParams {
            curr_pic_frame_idx: 0,
            list: 0,
            num_refs_in_list: num_refs,
            ref_pic_list: &self.ref_pic_list,
            poc_curr_pic: poc_curr,
            poc_list: &self.poc_list,
            ref_idx_mapping: &self.mapping,
            long_term_flags: 0,
            field_pic_flags: 0,
            bottom_field_flags: 0,
            dummy_reference: false,
        }
    }
}

#[test]
fn tb_value_is_clipped_to_signed_byte() {
    let mut fixture = RefFixture::new();
    fixture.ref_pic_list[0][0].frame_idx = 0;
    fixture.ref_pic_list[0][1].frame_idx = 1;
    fixture.ref_pic_list[0][2].frame_idx = 2;
    fixture.poc_list[0] = -1000; // diff 1000, clips to 127
    fixture.poc_list[1] = 500; // diff -500, clips to -128
    fixture.poc_list[2] = -5; // diff 5, in range

    let cmd = generic::ref_idx_state::<Gen12>(&fixture.params(3, 0)).unwrap();
    let dwords = cmd.dwords();

    assert_eq!(dwords[2] & 0xff, 127);
    assert_eq!(dwords[3] & 0xff, 0x80);
    assert_eq!(dwords[4] & 0xff, 5);
}

#[test]
fn entries_past_active_count_are_zero() {
    let mut fixture = RefFixture::new();
    fixture.ref_pic_list[0][0].frame_idx = 0;
    fixture.poc_list[0] = -3;

    let cmd = generic::ref_idx_state::<Gen12>(&fixture.params(1, 0)).unwrap();
    let dwords = cmd.dwords();

    assert_ne!(dwords[2], 0);
    for entry in 1..REF_ENTRY_COUNT {
        assert_eq!(dwords[2 + entry], 0, "entry {entry}");
    }
}

#[test]
fn list_header_encodes_active_count() {
    let mut fixture = RefFixture::new();
    for i in 0..4 {
        fixture.ref_pic_list[0][i].frame_idx = i as u8;
    }

    let cmd = generic::ref_idx_state::<Gen12>(&fixture.params(4, 10)).unwrap();
    // list number bit 0, active-minus-one bits 1..4.
    assert_eq!(cmd.dwords()[1], 3 << 1);
}

#[test]
fn long_term_and_field_flags_carry_through() {
    let mut fixture = RefFixture::new();
    fixture.ref_pic_list[0][0].frame_idx = 4;
    let mut params = fixture.params(1, 0);
    params.long_term_flags = 1 << 4;
    params.field_pic_flags = 1 << 4;
    params.bottom_field_flags = 1 << 4;

    let cmd = generic::ref_idx_state::<Gen12>(&params).unwrap();
    let entry = cmd.dwords()[2];

    assert_eq!((entry >> 8) & 0x7, 4); // mapped slot
    assert_eq!((entry >> 13) & 1, 1); // long term
    assert_eq!((entry >> 14) & 1, 1); // field pic
    // The bottom-field command bit is the inverse of the parameter flag.
    assert_eq!((entry >> 15) & 1, 0);
}

#[test]
fn dummy_reference_is_structurally_empty() {
    let fixture = RefFixture::new();
    let mut params = fixture.params(5, 0);
    params.dummy_reference = true;

    let cmd = generic::ref_idx_state::<Gen12>(&params).unwrap();
    let dwords = cmd.dwords();

    assert_eq!(dwords[0], 0x7392_0010);
    assert!(dwords[1..].iter().all(|&dw| dw == 0));
}

#[test]
fn out_of_range_frame_index_zeroes_the_entry() {
    let mut fixture = RefFixture::new();
    fixture.ref_pic_list[0][0].frame_idx = 0x7f;

    let cmd = generic::ref_idx_state::<Gen12>(&fixture.params(1, 0)).unwrap();
    assert_eq!(cmd.dwords()[2], 0);
}
