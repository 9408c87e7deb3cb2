//! Tile boundary table construction: prefix sums, early termination, and
//! the 21/22-row special cases.

use hcp_builder::generic;
use hcp_builder::params::{HevcPicParams, TileParams};
use hcp_builder::HcpError;
use hcp_cmds::gen12::Gen12;
use hcp_cmds::gen9::Gen9;
use hcp_cmds::iface::HcpCommand;

fn pic_with_tiles(cols_minus1: u8, rows_minus1: u8) -> HevcPicParams {
    HevcPicParams {
        num_tile_columns_minus1: cols_minus1,
        num_tile_rows_minus1: rows_minus1,
        tiles_enabled: true,
        ..Default::default()
    }
}

fn column_position(dwords: &[u32], index: usize) -> u32 {
    (dwords[2 + index / 4] >> (8 * (index % 4))) & 0xff
}

fn row_position(dwords: &[u32], index: usize) -> u32 {
    (dwords[7 + index / 4] >> (8 * (index % 4))) & 0xff
}

#[test]
fn column_positions_are_exclusive_prefix_sums() {
    let widths: [u16; 19] = [3, 4, 5, 6, 7, 8, 2, 1, 9, 3, 4, 5, 6, 7, 8, 2, 1, 9, 3];

    for cols_minus1 in [0u8, 1, 3, 4, 6, 11, 19] {
        let pic = pic_with_tiles(cols_minus1, 0);
        let cmd = generic::tile_state::<Gen12>(&TileParams {
            pic: &pic,
            tile_col_widths: &widths,
            tile_row_heights: &[1; 22],
        })
        .unwrap();
        let dwords = cmd.dwords();

        let mut expected = 0u32;
        for index in 0..=cols_minus1 as usize {
            assert_eq!(
                column_position(dwords, index),
                expected,
                "column {index} of {cols_minus1}"
            );
            if index < cols_minus1 as usize {
                expected += widths[index] as u32;
            }
        }
        // Nothing may be written beyond the declared count.
        for index in cols_minus1 as usize + 1..20 {
            assert_eq!(column_position(dwords, index), 0);
        }
    }
}

#[test]
fn early_termination_mid_group() {
    // Six columns: the walk stops at slot 2 of the second position group.
    let pic = pic_with_tiles(6, 0);
    let widths: [u16; 6] = [3, 4, 5, 6, 7, 8];
    let cmd = generic::tile_state::<Gen12>(&TileParams {
        pic: &pic,
        tile_col_widths: &widths,
        tile_row_heights: &[1; 22],
    })
    .unwrap();
    let dwords = cmd.dwords();

    assert_eq!(dwords[2], 0 | (3 << 8) | (7 << 16) | (12 << 24));
    assert_eq!(dwords[3], 18 | (25 << 8) | (33 << 16));
    assert_eq!(dwords[4], 0);
}

#[test]
fn row_special_case_twenty() {
    // 21 rows: the general loop fills five groups; the 21st position lands
    // in the sixth group.
    let pic = pic_with_tiles(0, 20);
    let heights = [1u16; 22];
    let cmd = generic::tile_state::<Gen12>(&TileParams {
        pic: &pic,
        tile_col_widths: &[1; 20],
        tile_row_heights: &heights,
    })
    .unwrap();
    let dwords = cmd.dwords();

    for index in 0..20 {
        assert_eq!(row_position(dwords, index), index as u32);
    }
    assert_eq!(row_position(dwords, 20), 20);
    assert_eq!(row_position(dwords, 21), 0);
}

#[test]
fn row_special_case_twenty_one() {
    // 22 rows: both extra positions are written into the sixth group.
    let pic = pic_with_tiles(0, 21);
    let heights = [1u16; 22];
    let cmd = generic::tile_state::<Gen9>(&TileParams {
        pic: &pic,
        tile_col_widths: &[1; 20],
        tile_row_heights: &heights,
    })
    .unwrap();
    let dwords = cmd.dwords();

    assert_eq!(row_position(dwords, 20), 20);
    assert_eq!(row_position(dwords, 21), 21);
}

#[test]
fn tile_counts_above_hardware_maximum_are_rejected() {
    let pic = pic_with_tiles(20, 0);
    let err = generic::tile_state::<Gen12>(&TileParams {
        pic: &pic,
        tile_col_widths: &[1; 22],
        tile_row_heights: &[1; 22],
    })
    .unwrap_err();
    assert_eq!(err, HcpError::InvalidParam("tile count exceeds hardware maximum"));

    let pic = pic_with_tiles(0, 22);
    let err = generic::tile_state::<Gen12>(&TileParams {
        pic: &pic,
        tile_col_widths: &[1; 22],
        tile_row_heights: &[1; 22],
    })
    .unwrap_err();
    assert_eq!(err, HcpError::InvalidParam("tile count exceeds hardware maximum"));
}

#[test]
fn short_dimension_arrays_are_rejected() {
    let pic = pic_with_tiles(6, 0);
    let err = generic::tile_state::<Gen12>(&TileParams {
        pic: &pic,
        tile_col_widths: &[1; 3],
        tile_row_heights: &[1; 22],
    })
    .unwrap_err();
    assert_eq!(err, HcpError::InvalidParam("tile dimension array too short"));
}

#[test]
fn declared_counts_reach_dword_one() {
    let pic = pic_with_tiles(4, 2);
    let cmd = generic::tile_state::<Gen12>(&TileParams {
        pic: &pic,
        tile_col_widths: &[2; 20],
        tile_row_heights: &[2; 22],
    })
    .unwrap();
    // rows in bits 0..4, columns in bits 5..9.
    assert_eq!(cmd.dwords()[1], 2 | (4 << 5));
}
