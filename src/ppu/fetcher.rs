use std::{cmp::max, collections::VecDeque};

use crate::{
    info::*,
    ppu::tile::{BgMapAttr, OamEntry},
    regs::LcdCtrl,
};

/// One pixel carrying enough information to pick its final color later.
#[derive(Default, Clone, Copy, bincode::Encode, bincode::Decode)]
pub(crate) struct Pixel {
    /// 2-bit index into whichever palette applies.
    pub(crate) color_id: u8,
    /// CGB: palette 0-7. Non-CGB: object palette 0-1 only.
    pub(crate) palette: u8,
    /// True if this pixel came from a sprite rather than BG/window.
    pub(crate) is_obj: bool,
    /// BG-OBJ priority bit carried from the BG map attribute (BG/win only).
    bg_priority: u8,
}

/// Pixel-FIFO fetcher for one scanline: scans sprites into `objects`,
/// assembles `screen_line` pixel-by-pixel, and reports completion via
/// [`LineFetcher::is_done`].
#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct LineFetcher {
    /// Sprites overlapping the current line, max 10, kept in OAM order
    /// (DMG additionally sorts by X before drawing; see `new_line`).
    pub(crate) objects: Vec<OamEntry>,
    /// Finished pixels for the line being drawn; may briefly hold a few
    /// extra entries beyond the visible width.
    pub(crate) screen_line: Vec<Pixel>,

    /// Always kept at 8+ pixels while actively shifting pixels out.
    fifo: VecDeque<Pixel>,
    phase: FetchPhase,
    lcd_x: u8,
    line_y: u8,
    /// Window's own line counter; advances only on lines where the window
    /// actually rendered.
    window_line: u8,
    bg_tile_col: u8,
    #[bincode(with_serde)]
    pub(crate) lcdc: LcdCtrl,
    pub(crate) scx: u8,
    pub(crate) scy: u8,
    pub(crate) wx: u8,
    pub(crate) wy: u8,
    /// Latched once from the cartridge header at boot.
    pub(crate) is_cgb: bool,
    /// Both VRAM banks; bank 1 only has meaning on CGB.
    pub(crate) vram: [[u8; SIZE_VRAM_BANK]; VRAM_BANKS],

    /// Sub-tile pixels discarded at the start of a line (`SCX % 8`);
    /// tile-level scrolling is already handled by tile fetching.
    discard_remaining: u8,

    /// X-position inside the window, once window mode has been entered.
    window_x: Option<u8>,
    /// Sprite currently being fetched, if any.
    fetching: Option<OamEntry>,
    fetched: TileLine,
}

#[derive(Debug, Default, Clone, Copy, bincode::Encode, bincode::Decode)]
enum FetchPhase {
    #[default]
    TileId,
    TileLow,
    TileHigh,
    Push,
}

#[derive(Default, bincode::Encode, bincode::Decode)]
struct TileLine {
    id: u8,
    low: u8,
    high: u8,
    bank: u8,
    palette: u8,
    row: u8,
    priority: u8,
    xflip: bool,
    yflip: bool,
}

impl LineFetcher {
    pub(crate) fn new() -> Self {
        Self {
            fifo: VecDeque::with_capacity(16), // FIFO never holds more than 16
            phase: FetchPhase::TileId,
            ..Default::default()
        }
    }

    /// Advance the fetcher by one 2-dot step: shift out up to 2 queued
    /// pixels, then run one stage of the tile/sprite fetch pipeline. A
    /// window crossing or sprite hit restarts the pipeline mid-line; once
    /// entered, a window fetch runs for the rest of the line.
    pub(crate) fn tick_2_dots(&mut self) {
        self.shift_out_ready_pixels();

        use FetchPhase::*;
        self.phase = match self.phase {
            TileId if self.fetching.is_some() => self.begin_sprite_tile(),
            TileId => self.begin_bg_tile(),
            TileLow => self.read_tile_low(),
            TileHigh => self.read_tile_high(),
            Push if self.fetching.is_some() => self.push_sprite_pixels(),
            Push => self.push_bg_pixels(),
        };
    }

    /// Reset and prepare to fetch `line`; call before OAM scan starts.
    pub(crate) fn new_line(&mut self, line: u8) {
        if line == 0 {
            self.window_line = 0;
        } else if self.window_x.is_some() {
            self.window_line += 1;
        }

        self.fifo.clear();
        self.objects.clear();
        self.screen_line.clear();
        self.fetching = None;
        self.window_x = None;
        self.phase = FetchPhase::TileId;

        self.lcd_x = 0;
        self.line_y = line;
        self.bg_tile_col = 0;
        self.discard_remaining = self.scx % 8;

        assert!(self.objects.len() <= MAX_OBJ_PER_LINE);
        if !self.is_cgb {
            self.objects.sort_by(|a, b| a.xpos.cmp(&b.xpos));
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.screen_line.len() >= PPU_LINE_PIXELS as usize
    }

    // --- pipeline stages, each lasting one 2-dot step -------------------

    fn begin_bg_tile(&mut self) -> FetchPhase {
        let (scx, scy) = (self.scx, self.scy);
        let map = self.active_tile_map();

        // Position within the 32x32-tile (256x256 px) BG/window plane.
        let (tile_x, y) = if let Some(x) = self.window_x {
            (x / 8, self.window_line)
        } else {
            (
                (scx / 8 + self.bg_tile_col) % 32,
                scy.wrapping_add(self.line_y),
            )
        };

        self.fetched = self.read_tile_header(map, tile_x, y / 8);
        self.fetched.row = y % 8;
        FetchPhase::TileLow
    }

    fn begin_sprite_tile(&mut self) -> FetchPhase {
        let obj = self.fetching.unwrap();
        self.fetched = tile_header_for_sprite(self.is_cgb, obj);

        // Tall (8x16) sprites are two consecutive tiles; the top half has
        // the even tile ID, unless Y-flipped, which swaps them.
        if self.lcdc.obj_size == 1 {
            let is_bottom_half = self.line_y + 16 - obj.ypos > 8;
            self.fetched.id = if is_bottom_half == self.fetched.yflip {
                self.fetched.id & !1
            } else {
                self.fetched.id | 1
            }
        }
        // Row offset from the sprite's top edge; also correct for tall sprites.
        self.fetched.row = (self.line_y % 8).wrapping_sub(obj.ypos % 8) % 8;

        FetchPhase::TileLow
    }

    fn read_tile_low(&mut self) -> FetchPhase {
        // Both bytes are actually fetched together in the next stage.
        FetchPhase::TileHigh
    }

    fn read_tile_high(&mut self) -> FetchPhase {
        let addr_mode = if self.fetching.is_some() {
            1 // Sprites always use addressing mode 1.
        } else {
            self.lcdc.bg_win_tile_data
        };

        (self.fetched.low, self.fetched.high) = self.read_tile_row_bytes(
            addr_mode,
            self.fetched.bank,
            self.fetched.id,
            self.fetched.row,
            self.fetched.yflip,
            self.fetched.xflip,
        );

        FetchPhase::Push
    }

    fn push_bg_pixels(&mut self) -> FetchPhase {
        // A full tile-row (8 pixels) is pushed at once, but the FIFO only
        // holds 16, so stall if there isn't room yet.
        if self.fifo.len() > 8 {
            return FetchPhase::Push;
        }

        for i in 0..8 {
            let color_id = if !self.is_cgb && self.lcdc.bg_win_priotity == 0 {
                0 // BG/window forced blank in non-CGB mode.
            } else {
                tile_row_color_id(self.fetched.low, self.fetched.high, i)
            };

            self.fifo.push_back(Pixel {
                color_id,
                palette: self.fetched.palette,
                bg_priority: self.fetched.priority,
                is_obj: false,
            });
        }

        self.bg_tile_col += 1;
        self.window_x = self.window_x.map(|pos| pos + 8);
        FetchPhase::TileId
    }

    fn push_sprite_pixels(&mut self) -> FetchPhase {
        assert!(self.fifo.len() >= 8);
        let obj = self.fetching.unwrap();

        // `xpos` is the sprite's X position plus 8; clip anything hanging
        // off the left edge of the screen.
        let clipped = if obj.xpos < 8 { 8 - obj.xpos } else { 0 };
        for x in clipped..8 {
            let fifo_idx = (x - clipped) as usize;
            let mixed = self.mix_with_sprite(self.is_cgb, self.fifo[fifo_idx], x);
            self.fifo[fifo_idx] = mixed;
        }

        self.fetching = None;
        FetchPhase::TileId
    }

    fn shift_out_ready_pixels(&mut self) {
        if self.fifo.len() <= 8 {
            return;
        }

        if self.discard_remaining > 0 {
            assert!(self.lcd_x == 0);
            while self.discard_remaining > 0 {
                self.fifo.pop_front();
                self.discard_remaining -= 1;
            }
            return;
        }

        // Two dots elapsed this step, so up to two pixels can shift out.
        self.shift_out_one_pixel();
        self.shift_out_one_pixel();
    }

    /// Shift one pixel out to `screen_line` if the FIFO has a surplus.
    /// Diverts into window mode or sprite mode first if either is due at
    /// the current screen X, deferring the shift until that resolves.
    fn shift_out_one_pixel(&mut self) {
        if self.fifo.len() <= 8 || self.fetching.is_some() {
            return;
        }

        if self.window_x.is_none() && self.lcdc.win_enable == 1 {
            let (wx, wy) = (self.wx, self.wy);

            // The window's top-left corner is conventionally (wx=7, wy=0).
            if wx <= self.lcd_x + 7 && wy <= self.line_y {
                // WX below 7 is out-of-spec; clamp it to get a real X.
                self.window_x = Some(self.lcd_x - (max(7, wx) - 7));
                self.fifo.clear();
                self.discard_remaining = 0;
                return;
            }
        }

        if self.fetching.is_none() && self.lcdc.obj_enable == 1 {
            self.fetching = self.take_sprite_at(self.lcd_x);

            if self.fetching.is_some() {
                assert!(self.fifo.len() >= 8);
                self.phase = FetchPhase::TileId;
                return;
            }
        }

        self.screen_line.push(self.fifo.pop_front().unwrap());
        self.lcd_x += 1;
    }

    fn active_tile_map(&self) -> u8 {
        let map_select = if self.window_x.is_some() {
            self.lcdc.win_tile_map
        } else {
            self.lcdc.bg_tile_map
        };
        map_select
    }

    /// Remove and return the highest-priority sprite at screen X `x`, if any.
    fn take_sprite_at(&mut self, x: u8) -> Option<OamEntry> {
        for i in 0..self.objects.len() {
            let obj = self.objects[i];
            if obj.xpos <= x + 8 && x + 8 < obj.xpos + 8 {
                return Some(self.objects.remove(i));
            }
        }
        None
    }

    /// Combine an existing FIFO pixel with the currently-fetched sprite's
    /// pixel at `sprite_col` (0-7), per BG-OBJ priority.
    fn mix_with_sprite(&self, is_cgb: bool, existing: Pixel, sprite_col: u8) -> Pixel {
        let obj = self.fetching.unwrap();
        let (low, high) = (self.fetched.low, self.fetched.high);

        let candidate = Pixel {
            palette: self.fetched.palette,
            color_id: tile_row_color_id(low, high, sprite_col),
            bg_priority: 0,
            is_obj: true,
        };

        // Color 0 on a sprite is always transparent.
        if candidate.color_id != 0 && sprite_wins_priority(is_cgb, self.lcdc, existing, obj) {
            candidate
        } else {
            existing
        }
    }

    fn read_tile_row_bytes(
        &self,
        addr_mode: u8,
        bank: u8,
        id: u8,
        row: u8,
        yflip: bool,
        xflip: bool,
    ) -> (u8, u8) {
        let row = if yflip { 7 - row as usize } else { row as usize };

        let addr = tile_data_vram_addr(addr_mode, id);
        let (low, high) = (
            self.vram[bank as usize][addr + 2 * row],
            self.vram[bank as usize][addr + 2 * row + 1],
        );

        if xflip {
            (low.reverse_bits(), high.reverse_bits())
        } else {
            (low, high)
        }
    }

    fn read_tile_header(&self, tile_map: u8, tile_x: u8, tile_y: u8) -> TileLine {
        // The tile-ID map lives in VRAM bank 0, its attribute map in bank 1.
        let addr = tile_id_vram_addr(tile_map, tile_x, tile_y);
        let id = self.vram[0][addr];
        let attrs = BgMapAttr::new(if self.is_cgb { self.vram[1][addr] } else { 0 });

        TileLine {
            id,
            bank: attrs.bank,
            xflip: attrs.xflip == 1,
            yflip: attrs.yflip == 1,
            priority: attrs.priority,
            ..Default::default()
        }
    }
}

/// Whether a sprite pixel should be drawn over the existing BG/window pixel.
fn sprite_wins_priority(is_cgb: bool, lcdc: LcdCtrl, existing: Pixel, obj: OamEntry) -> bool {
    // Higher-priority sprites are drawn first; never overwrite one.
    if existing.is_obj {
        return false;
    }
    // BG color 0 is always drawn under every sprite.
    if existing.color_id == 0 {
        return true;
    }
    if !is_cgb {
        return obj.attrs.bg_priority == 0;
    }
    // CGB folds in the master BG-over-OBJ priority bit too.
    lcdc.bg_win_priotity == 0 || (existing.bg_priority == 0 && obj.attrs.bg_priority == 0)
}

fn tile_header_for_sprite(is_cgb: bool, obj: OamEntry) -> TileLine {
    let (palette, bank) = if is_cgb {
        (obj.attrs.cgb_palette, obj.attrs.bank)
    } else {
        (obj.attrs.dmg_palette, 0)
    };

    TileLine {
        id: obj.tile_id,
        bank,
        palette,
        priority: obj.attrs.bg_priority,
        xflip: obj.attrs.xflip == 1,
        yflip: obj.attrs.yflip == 1,
        ..Default::default()
    }
}

#[inline]
fn tile_data_vram_addr(addr_mode: u8, tile_id: u8) -> usize {
    // Mode 0: TILE_BLOCK2 + signed id. Mode 1: TILE_BLOCK0 + unsigned id.
    let offset = (tile_id as usize) * TILE_SIZE;
    let block = match addr_mode {
        1 => TILE_BLOCK0,
        0 => {
            if tile_id < 127 {
                TILE_BLOCK2
            } else {
                TILE_BLOCK1
            }
        }
        _ => panic!("invalid tile addressing mode"),
    };
    offset + block - *ADDR_VRAM.start()
}

#[inline]
fn tile_id_vram_addr(tile_map: u8, tx: u8, ty: u8) -> usize {
    let base = match tile_map {
        0 => TILE_MAP0,
        1 => TILE_MAP1,
        _ => unreachable!(),
    };

    // Each map is a 32x32 grid of 1-byte tile IDs.
    base - *ADDR_VRAM.start() + ty as usize * 32 + tx as usize
}

#[inline(always)]
fn tile_row_color_id(low: u8, high: u8, col: u8) -> u8 {
    debug_assert!(col < 8);
    let bit = 7 - col; // bit 7 is the leftmost pixel
    ((low >> bit) & 1) | ((high >> bit) & 1) << 1
}
