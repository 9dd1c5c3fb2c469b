//! USB2.0 Host/PHY Register Definitions
//!
//! Offsets are relative to the PHY window handed out by the hardware
//! description. On R-Car Gen3 that window starts 0x200 into the USB2.0 host
//! block, so the manual's offsets are 0x200 higher than the ones below.

// =============================================================================
// Register Offsets
// =============================================================================

/// Interrupt enable register offset
pub const INT_ENABLE_OFFSET: usize = 0x000;
/// USB control register offset
pub const USBCTR_OFFSET: usize = 0x00C;
/// Suspend/resume timing register offset
pub const SPD_RSM_TIMSET_OFFSET: usize = 0x10C;
/// Over-current timing register offset
pub const OC_TIMSET_OFFSET: usize = 0x110;
/// Common control register offset
pub const COMMCTRL_OFFSET: usize = 0x600;
/// OTG interrupt status register offset (write-1-to-clear)
pub const OBINTSTA_OFFSET: usize = 0x604;
/// OTG interrupt enable register offset
pub const OBINTEN_OFFSET: usize = 0x608;
/// VBUS control register offset
pub const VBCTRL_OFFSET: usize = 0x60C;
/// Line control register 1 offset
pub const LINECTRL1_OFFSET: usize = 0x610;
/// ADP control register offset
pub const ADPCTRL_OFFSET: usize = 0x630;

// =============================================================================
// INT_ENABLE @ 0x000
// =============================================================================

/// Common interrupt enable
pub const INT_ENABLE_UCOM_INTEN: u32 = 1 << 3;
/// Host controller interrupt B enable
pub const INT_ENABLE_USBH_INTB_EN: u32 = 1 << 2;
/// Host controller interrupt A enable
pub const INT_ENABLE_USBH_INTA_EN: u32 = 1 << 1;

/// Interrupt sources enabled for OTG operation
pub const INT_ENABLE_OTG: u32 =
    INT_ENABLE_UCOM_INTEN | INT_ENABLE_USBH_INTB_EN | INT_ENABLE_USBH_INTA_EN;

// =============================================================================
// USBCTR @ 0x00C
// =============================================================================

/// PLL reset
pub const USBCTR_PLL_RST: u32 = 1 << 1;

// =============================================================================
// COMMCTRL @ 0x600
// =============================================================================

/// Peripheral mode select (0 = host, 1 = peripheral)
pub const COMMCTRL_OTG_PERI: u32 = 1 << 31;

// =============================================================================
// OBINTSTA / OBINTEN @ 0x604 / 0x608
// =============================================================================

/// Session-valid change
pub const OBINT_SESSVLDCHG: u32 = 1 << 12;
/// ID pin change
pub const OBINT_IDDIGCHG: u32 = 1 << 11;

/// OTG interrupt sources used for role detection
pub const OBINT_OTG: u32 = OBINT_SESSVLDCHG | OBINT_IDDIGCHG;

// =============================================================================
// VBCTRL @ 0x60C
// =============================================================================

/// Alternate VBUS drive select
pub const VBCTRL_DRVVBUSSEL: u32 = 1 << 8;

// =============================================================================
// LINECTRL1 @ 0x610
// =============================================================================

/// D+ pull-down resistor enable
pub const LINECTRL1_DPRPD_EN: u32 = 1 << 19;
/// D+ pull-down
pub const LINECTRL1_DP_RPD: u32 = 1 << 18;
/// D- pull-down resistor enable
pub const LINECTRL1_DMRPD_EN: u32 = 1 << 17;
/// D- pull-down
pub const LINECTRL1_DM_RPD: u32 = 1 << 16;

/// Both pull-down enables
pub const LINECTRL1_RPD_EN: u32 = LINECTRL1_DPRPD_EN | LINECTRL1_DMRPD_EN;
/// Both pull-downs
pub const LINECTRL1_RPD: u32 = LINECTRL1_DP_RPD | LINECTRL1_DM_RPD;

// =============================================================================
// ADPCTRL @ 0x630
// =============================================================================

/// OTG session valid
pub const ADPCTRL_OTGSESSVLD: u32 = 1 << 20;
/// ID pin digital value
pub const ADPCTRL_IDDIG: u32 = 1 << 19;
/// ID pin sampling enable (pull-up)
pub const ADPCTRL_IDPULLUP: u32 = 1 << 5;
/// Drive VBUS
pub const ADPCTRL_DRVVBUS: u32 = 1 << 4;

/// Both bits set means a host is attached and this port is the device
pub const ADPCTRL_DEVICE_MASK: u32 = ADPCTRL_IDDIG | ADPCTRL_OTGSESSVLD;
