//! Groestl-256 Kernel Constants
//!
//! Geometry of the 512-bit state, the padding layout, the per-row shift
//! offsets of both permutations, and the two fused lookup tables.
//!
//! The state is an 8x8 byte matrix stored column-major: word `j` is column
//! `j`, and its most-significant byte is row 0.
//!
//! `T0[x]` holds column 0 of `MixBytes` applied to a column whose only
//! non-zero entry is `S(x)` in row 0, where `S` is the AES S-box and the
//! circulant is `circ(02, 02, 03, 04, 05, 03, 05, 07)`. A byte from row `i`
//! contributes `T0[x].rotate_right(8 * i)`, so only `T0` and
//! `T4 = T0.rotate_right(32)` are stored; rows 1-3 and 5-7 rotate those by
//! 8, 16 and 24 bits at lookup time.

// =============================================================================
// ROUNDS
// =============================================================================

/// Rounds per permutation for the 512-bit (short) variant.
pub const ROUNDS: usize = 10;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Compression block size (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Number of 64-bit columns in the state.
pub const COLS: usize = 8;

/// Digest size (in bytes).
pub const DIGEST_SIZE: usize = 32;

/// Digest size in bits; seeds the last state word.
pub const OUTPUT_BITS: u64 = (DIGEST_SIZE * 8) as u64;

// =============================================================================
// PADDING
// =============================================================================

/// First padding byte, a single `1` bit followed by zeros.
pub const STOP_BYTE: u8 = 0x80;

/// Size of the big-endian block-count field ending the padded message.
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Longest buffered tail that still fits stop byte and count in one block.
pub const SINGLE_BLOCK_TAIL_MAX: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE - 1;

// =============================================================================
// SHIFT OFFSETS
// =============================================================================

/// Left rotation applied to each row by `ShiftBytes` in P.
pub const SHIFT_P: [usize; COLS] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Left rotation applied to each row by `ShiftBytes` in Q.
pub const SHIFT_Q: [usize; COLS] = [1, 3, 5, 7, 0, 2, 4, 6];

// =============================================================================
// FUSED SUBBYTES + MIXBYTES TABLES
// =============================================================================

/// Row-0 table. Rows 1-3 use `T0[x].rotate_right(8 * row)`.
#[rustfmt::skip]
pub const T0: [u64; 256] = [
    0xc632_f4a5_f497_a5c6, 0xf86f_9784_97eb_84f8, 0xee5e_b099_b0c7_99ee, 0xf67a_8c8d_8cf7_8df6,
    0xffe8_170d_17e5_0dff, 0xd60a_dcbd_dcb7_bdd6, 0xde16_c8b1_c8a7_b1de, 0x916d_fc54_fc39_5491,
    0x6090_f050_f0c0_5060, 0x0207_0503_0504_0302, 0xce2e_e0a9_e087_a9ce, 0x56d1_877d_87ac_7d56,
    0xe7cc_2b19_2bd5_19e7, 0xb513_a662_a671_62b5, 0x4d7c_31e6_319a_e64d, 0xec59_b59a_b5c3_9aec,
    0x8f40_cf45_cf05_458f, 0x1fa3_bc9d_bc3e_9d1f, 0x8949_c040_c009_4089, 0xfa68_9287_92ef_87fa,
    0xefd0_3f15_3fc5_15ef, 0xb294_26eb_267f_ebb2, 0x8ece_40c9_4007_c98e, 0xfbe6_1d0b_1ded_0bfb,
    0x416e_2fec_2f82_ec41, 0xb31a_a967_a97d_67b3, 0x5f43_1cfd_1cbe_fd5f, 0x4560_25ea_258a_ea45,
    0x23f9_dabf_da46_bf23, 0x5351_02f7_02a6_f753, 0xe445_a196_a1d3_96e4, 0x9b76_ed5b_ed2d_5b9b,
    0x7528_5dc2_5dea_c275, 0xe1c5_241c_24d9_1ce1, 0x3dd4_e9ae_e97a_ae3d, 0x4cf2_be6a_be98_6a4c,
    0x6c82_ee5a_eed8_5a6c, 0x7ebd_c341_c3fc_417e, 0xf5f3_0602_06f1_02f5, 0x8352_d14f_d11d_4f83,
    0x688c_e45c_e4d0_5c68, 0x5156_07f4_07a2_f451, 0xd18d_5c34_5cb9_34d1, 0xf9e1_1808_18e9_08f9,
    0xe24c_ae93_aedf_93e2, 0xab3e_9573_954d_73ab, 0x6297_f553_f5c4_5362, 0x2a6b_413f_4154_3f2a,
    0x081c_140c_1410_0c08, 0x9563_f652_f631_5295, 0x46e9_af65_af8c_6546, 0x9d7f_e25e_e221_5e9d,
    0x3048_7828_7860_2830, 0x37cf_f8a1_f86e_a137, 0x0a1b_110f_1114_0f0a, 0x2feb_c4b5_c45e_b52f,
    0x0e15_1b09_1b1c_090e, 0x247e_5a36_5a48_3624, 0x1bad_b69b_b636_9b1b, 0xdf98_473d_47a5_3ddf,
    0xcda7_6a26_6a81_26cd, 0x4ef5_bb69_bb9c_694e, 0x7f33_4ccd_4cfe_cd7f, 0xea50_ba9f_bacf_9fea,
    0x123f_2d1b_2d24_1b12, 0x1da4_b99e_b93a_9e1d, 0x58c4_9c74_9cb0_7458, 0x3446_722e_7268_2e34,
    0x3641_772d_776c_2d36, 0xdc11_cdb2_cda3_b2dc, 0xb49d_29ee_2973_eeb4, 0x5b4d_16fb_16b6_fb5b,
    0xa4a5_01f6_0153_f6a4, 0x76a1_d74d_d7ec_4d76, 0xb714_a361_a375_61b7, 0x7d34_49ce_49fa_ce7d,
    0x52df_8d7b_8da4_7b52, 0xdd9f_423e_42a1_3edd, 0x5ecd_9371_93bc_715e, 0x13b1_a297_a226_9713,
    0xa6a2_04f5_0457_f5a6, 0xb901_b868_b869_68b9, 0x0000_0000_0000_0000, 0xc1b5_742c_7499_2cc1,
    0x40e0_a060_a080_6040, 0xe3c2_211f_21dd_1fe3, 0x793a_43c8_43f2_c879, 0xb69a_2ced_2c77_edb6,
    0xd40d_d9be_d9b3_bed4, 0x8d47_ca46_ca01_468d, 0x6717_70d9_70ce_d967, 0x72af_dd4b_dde4_4b72,
    0x94ed_79de_7933_de94, 0x98ff_67d4_672b_d498, 0xb093_23e8_237b_e8b0, 0x855b_de4a_de11_4a85,
    0xbb06_bd6b_bd6d_6bbb, 0xc5bb_7e2a_7e91_2ac5, 0x4f7b_34e5_349e_e54f, 0xedd7_3a16_3ac1_16ed,
    0x86d2_54c5_5417_c586, 0x9af8_62d7_622f_d79a, 0x6699_ff55_ffcc_5566, 0x11b6_a794_a722_9411,
    0x8ac0_4acf_4a0f_cf8a, 0xe9d9_3010_30c9_10e9, 0x040e_0a06_0a08_0604, 0xfe66_9881_98e7_81fe,
    0xa0ab_0bf0_0b5b_f0a0, 0x78b4_cc44_ccf0_4478, 0x25f0_d5ba_d54a_ba25, 0x4b75_3ee3_3e96_e34b,
    0xa2ac_0ef3_0e5f_f3a2, 0x5d44_19fe_19ba_fe5d, 0x80db_5bc0_5b1b_c080, 0x0580_858a_850a_8a05,
    0x3fd3_ecad_ec7e_ad3f, 0x21fe_dfbc_df42_bc21, 0x70a8_d848_d8e0_4870, 0xf1fd_0c04_0cf9_04f1,
    0x6319_7adf_7ac6_df63, 0x772f_58c1_58ee_c177, 0xaf30_9f75_9f45_75af, 0x42e7_a563_a584_6342,
    0x2070_5030_5040_3020, 0xe5cb_2e1a_2ed1_1ae5, 0xfdef_120e_12e1_0efd, 0xbf08_b76d_b765_6dbf,
    0x8155_d44c_d419_4c81, 0x1824_3c14_3c30_1418, 0x2679_5f35_5f4c_3526, 0xc3b2_712f_719d_2fc3,
    0xbe86_38e1_3867_e1be, 0x35c8_fda2_fd6a_a235, 0x88c7_4fcc_4f0b_cc88, 0x2e65_4b39_4b5c_392e,
    0x936a_f957_f93d_5793, 0x5558_0df2_0daa_f255, 0xfc61_9d82_9de3_82fc, 0x7ab3_c947_c9f4_477a,
    0xc827_efac_ef8b_acc8, 0xba88_32e7_326f_e7ba, 0x324f_7d2b_7d64_2b32, 0xe642_a495_a4d7_95e6,
    0xc03b_fba0_fb9b_a0c0, 0x19aa_b398_b332_9819, 0x9ef6_68d1_6827_d19e, 0xa322_817f_815d_7fa3,
    0x44ee_aa66_aa88_6644, 0x54d6_827e_82a8_7e54, 0x3bdd_e6ab_e676_ab3b, 0x0b95_9e83_9e16_830b,
    0x8cc9_45ca_4503_ca8c, 0xc7bc_7b29_7b95_29c7, 0x6b05_6ed3_6ed6_d36b, 0x286c_443c_4450_3c28,
    0xa72c_8b79_8b55_79a7, 0xbc81_3de2_3d63_e2bc, 0x1631_271d_272c_1d16, 0xad37_9a76_9a41_76ad,
    0xdb96_4d3b_4dad_3bdb, 0x649e_fa56_fac8_5664, 0x74a6_d24e_d2e8_4e74, 0x1436_221e_2228_1e14,
    0x92e4_76db_763f_db92, 0x0c12_1e0a_1e18_0a0c, 0x48fc_b46c_b490_6c48, 0xb88f_37e4_376b_e4b8,
    0x9f78_e75d_e725_5d9f, 0xbd0f_b26e_b261_6ebd, 0x4369_2aef_2a86_ef43, 0xc435_f1a6_f193_a6c4,
    0x39da_e3a8_e372_a839, 0x31c6_f7a4_f762_a431, 0xd38a_5937_59bd_37d3, 0xf274_868b_86ff_8bf2,
    0xd583_5632_56b1_32d5, 0x8b4e_c543_c50d_438b, 0x6e85_eb59_ebdc_596e, 0xda18_c2b7_c2af_b7da,
    0x018e_8f8c_8f02_8c01, 0xb11d_ac64_ac79_64b1, 0x9cf1_6dd2_6d23_d29c, 0x4972_3be0_3b92_e049,
    0xd81f_c7b4_c7ab_b4d8, 0xacb9_15fa_1543_faac, 0xf3fa_0907_09fd_07f3, 0xcfa0_6f25_6f85_25cf,
    0xca20_eaaf_ea8f_afca, 0xf47d_898e_89f3_8ef4, 0x4767_20e9_208e_e947, 0x1038_2818_2820_1810,
    0x6f0b_64d5_64de_d56f, 0xf073_8388_83fb_88f0, 0x4afb_b16f_b194_6f4a, 0x5cca_9672_96b8_725c,
    0x3854_6c24_6c70_2438, 0x575f_08f1_08ae_f157, 0x7321_52c7_52e6_c773, 0x9764_f351_f335_5197,
    0xcbae_6523_658d_23cb, 0xa125_847c_8459_7ca1, 0xe857_bf9c_bfcb_9ce8, 0x3e5d_6321_637c_213e,
    0x96ea_7cdd_7c37_dd96, 0x611e_7fdc_7fc2_dc61, 0x0d9c_9186_911a_860d, 0x0f9b_9485_941e_850f,
    0xe04b_ab90_abdb_90e0, 0x7cba_c642_c6f8_427c, 0x7126_57c4_57e2_c471, 0xcc29_e5aa_e583_aacc,
    0x90e3_73d8_733b_d890, 0x0609_0f05_0f0c_0506, 0xf7f4_0301_03f5_01f7, 0x1c2a_3612_3638_121c,
    0xc23c_fea3_fe9f_a3c2, 0x6a8b_e15f_e1d4_5f6a, 0xaebe_10f9_1047_f9ae, 0x6902_6bd0_6bd2_d069,
    0x17bf_a891_a82e_9117, 0x9971_e858_e829_5899, 0x3a53_6927_6974_273a, 0x27f7_d0b9_d04e_b927,
    0xd991_4838_48a9_38d9, 0xebde_3513_35cd_13eb, 0x2be5_ceb3_ce56_b32b, 0x2277_5533_5544_3322,
    0xd204_d6bb_d6bf_bbd2, 0xa939_9070_9049_70a9, 0x0787_8089_800e_8907, 0x33c1_f2a7_f266_a733,
    0x2dec_c1b6_c15a_b62d, 0x3c5a_6622_6678_223c, 0x15b8_ad92_ad2a_9215, 0xc9a9_6020_6089_20c9,
    0x875c_db49_db15_4987, 0xaab0_1aff_1a4f_ffaa, 0x50d8_8878_88a0_7850, 0xa52b_8e7a_8e51_7aa5,
    0x0389_8a8f_8a06_8f03, 0x594a_13f8_13b2_f859, 0x0992_9b80_9b12_8009, 0x1a23_3917_3934_171a,
    0x6510_75da_75ca_da65, 0xd784_5331_53b5_31d7, 0x84d5_51c6_5113_c684, 0xd003_d3b8_d3bb_b8d0,
    0x82dc_5ec3_5e1f_c382, 0x29e2_cbb0_cb52_b029, 0x5ac3_9977_99b4_775a, 0x1e2d_3311_333c_111e,
    0x7b3d_46cb_46f6_cb7b, 0xa8b7_1ffc_1f4b_fca8, 0x6d0c_61d6_61da_d66d, 0x2c62_4e3a_4e58_3a2c,
];

/// Row-4 table. Rows 5-7 use `T4[x].rotate_right(8 * (row - 4))`.
#[rustfmt::skip]
pub const T4: [u64; 256] = [
    0xf497_a5c6_c632_f4a5, 0x97eb_84f8_f86f_9784, 0xb0c7_99ee_ee5e_b099, 0x8cf7_8df6_f67a_8c8d,
    0x17e5_0dff_ffe8_170d, 0xdcb7_bdd6_d60a_dcbd, 0xc8a7_b1de_de16_c8b1, 0xfc39_5491_916d_fc54,
    0xf0c0_5060_6090_f050, 0x0504_0302_0207_0503, 0xe087_a9ce_ce2e_e0a9, 0x87ac_7d56_56d1_877d,
    0x2bd5_19e7_e7cc_2b19, 0xa671_62b5_b513_a662, 0x319a_e64d_4d7c_31e6, 0xb5c3_9aec_ec59_b59a,
    0xcf05_458f_8f40_cf45, 0xbc3e_9d1f_1fa3_bc9d, 0xc009_4089_8949_c040, 0x92ef_87fa_fa68_9287,
    0x3fc5_15ef_efd0_3f15, 0x267f_ebb2_b294_26eb, 0x4007_c98e_8ece_40c9, 0x1ded_0bfb_fbe6_1d0b,
    0x2f82_ec41_416e_2fec, 0xa97d_67b3_b31a_a967, 0x1cbe_fd5f_5f43_1cfd, 0x258a_ea45_4560_25ea,
    0xda46_bf23_23f9_dabf, 0x02a6_f753_5351_02f7, 0xa1d3_96e4_e445_a196, 0xed2d_5b9b_9b76_ed5b,
    0x5dea_c275_7528_5dc2, 0x24d9_1ce1_e1c5_241c, 0xe97a_ae3d_3dd4_e9ae, 0xbe98_6a4c_4cf2_be6a,
    0xeed8_5a6c_6c82_ee5a, 0xc3fc_417e_7ebd_c341, 0x06f1_02f5_f5f3_0602, 0xd11d_4f83_8352_d14f,
    0xe4d0_5c68_688c_e45c, 0x07a2_f451_5156_07f4, 0x5cb9_34d1_d18d_5c34, 0x18e9_08f9_f9e1_1808,
    0xaedf_93e2_e24c_ae93, 0x954d_73ab_ab3e_9573, 0xf5c4_5362_6297_f553, 0x4154_3f2a_2a6b_413f,
    0x1410_0c08_081c_140c, 0xf631_5295_9563_f652, 0xaf8c_6546_46e9_af65, 0xe221_5e9d_9d7f_e25e,
    0x7860_2830_3048_7828, 0xf86e_a137_37cf_f8a1, 0x1114_0f0a_0a1b_110f, 0xc45e_b52f_2feb_c4b5,
    0x1b1c_090e_0e15_1b09, 0x5a48_3624_247e_5a36, 0xb636_9b1b_1bad_b69b, 0x47a5_3ddf_df98_473d,
    0x6a81_26cd_cda7_6a26, 0xbb9c_694e_4ef5_bb69, 0x4cfe_cd7f_7f33_4ccd, 0xbacf_9fea_ea50_ba9f,
    0x2d24_1b12_123f_2d1b, 0xb93a_9e1d_1da4_b99e, 0x9cb0_7458_58c4_9c74, 0x7268_2e34_3446_722e,
    0x776c_2d36_3641_772d, 0xcda3_b2dc_dc11_cdb2, 0x2973_eeb4_b49d_29ee, 0x16b6_fb5b_5b4d_16fb,
    0x0153_f6a4_a4a5_01f6, 0xd7ec_4d76_76a1_d74d, 0xa375_61b7_b714_a361, 0x49fa_ce7d_7d34_49ce,
    0x8da4_7b52_52df_8d7b, 0x42a1_3edd_dd9f_423e, 0x93bc_715e_5ecd_9371, 0xa226_9713_13b1_a297,
    0x0457_f5a6_a6a2_04f5, 0xb869_68b9_b901_b868, 0x0000_0000_0000_0000, 0x7499_2cc1_c1b5_742c,
    0xa080_6040_40e0_a060, 0x21dd_1fe3_e3c2_211f, 0x43f2_c879_793a_43c8, 0x2c77_edb6_b69a_2ced,
    0xd9b3_bed4_d40d_d9be, 0xca01_468d_8d47_ca46, 0x70ce_d967_6717_70d9, 0xdde4_4b72_72af_dd4b,
    0x7933_de94_94ed_79de, 0x672b_d498_98ff_67d4, 0x237b_e8b0_b093_23e8, 0xde11_4a85_855b_de4a,
    0xbd6d_6bbb_bb06_bd6b, 0x7e91_2ac5_c5bb_7e2a, 0x349e_e54f_4f7b_34e5, 0x3ac1_16ed_edd7_3a16,
    0x5417_c586_86d2_54c5, 0x622f_d79a_9af8_62d7, 0xffcc_5566_6699_ff55, 0xa722_9411_11b6_a794,
    0x4a0f_cf8a_8ac0_4acf, 0x30c9_10e9_e9d9_3010, 0x0a08_0604_040e_0a06, 0x98e7_81fe_fe66_9881,
    0x0b5b_f0a0_a0ab_0bf0, 0xccf0_4478_78b4_cc44, 0xd54a_ba25_25f0_d5ba, 0x3e96_e34b_4b75_3ee3,
    0x0e5f_f3a2_a2ac_0ef3, 0x19ba_fe5d_5d44_19fe, 0x5b1b_c080_80db_5bc0, 0x850a_8a05_0580_858a,
    0xec7e_ad3f_3fd3_ecad, 0xdf42_bc21_21fe_dfbc, 0xd8e0_4870_70a8_d848, 0x0cf9_04f1_f1fd_0c04,
    0x7ac6_df63_6319_7adf, 0x58ee_c177_772f_58c1, 0x9f45_75af_af30_9f75, 0xa584_6342_42e7_a563,
    0x5040_3020_2070_5030, 0x2ed1_1ae5_e5cb_2e1a, 0x12e1_0efd_fdef_120e, 0xb765_6dbf_bf08_b76d,
    0xd419_4c81_8155_d44c, 0x3c30_1418_1824_3c14, 0x5f4c_3526_2679_5f35, 0x719d_2fc3_c3b2_712f,
    0x3867_e1be_be86_38e1, 0xfd6a_a235_35c8_fda2, 0x4f0b_cc88_88c7_4fcc, 0x4b5c_392e_2e65_4b39,
    0xf93d_5793_936a_f957, 0x0daa_f255_5558_0df2, 0x9de3_82fc_fc61_9d82, 0xc9f4_477a_7ab3_c947,
    0xef8b_acc8_c827_efac, 0x326f_e7ba_ba88_32e7, 0x7d64_2b32_324f_7d2b, 0xa4d7_95e6_e642_a495,
    0xfb9b_a0c0_c03b_fba0, 0xb332_9819_19aa_b398, 0x6827_d19e_9ef6_68d1, 0x815d_7fa3_a322_817f,
    0xaa88_6644_44ee_aa66, 0x82a8_7e54_54d6_827e, 0xe676_ab3b_3bdd_e6ab, 0x9e16_830b_0b95_9e83,
    0x4503_ca8c_8cc9_45ca, 0x7b95_29c7_c7bc_7b29, 0x6ed6_d36b_6b05_6ed3, 0x4450_3c28_286c_443c,
    0x8b55_79a7_a72c_8b79, 0x3d63_e2bc_bc81_3de2, 0x272c_1d16_1631_271d, 0x9a41_76ad_ad37_9a76,
    0x4dad_3bdb_db96_4d3b, 0xfac8_5664_649e_fa56, 0xd2e8_4e74_74a6_d24e, 0x2228_1e14_1436_221e,
    0x763f_db92_92e4_76db, 0x1e18_0a0c_0c12_1e0a, 0xb490_6c48_48fc_b46c, 0x376b_e4b8_b88f_37e4,
    0xe725_5d9f_9f78_e75d, 0xb261_6ebd_bd0f_b26e, 0x2a86_ef43_4369_2aef, 0xf193_a6c4_c435_f1a6,
    0xe372_a839_39da_e3a8, 0xf762_a431_31c6_f7a4, 0x59bd_37d3_d38a_5937, 0x86ff_8bf2_f274_868b,
    0x56b1_32d5_d583_5632, 0xc50d_438b_8b4e_c543, 0xebdc_596e_6e85_eb59, 0xc2af_b7da_da18_c2b7,
    0x8f02_8c01_018e_8f8c, 0xac79_64b1_b11d_ac64, 0x6d23_d29c_9cf1_6dd2, 0x3b92_e049_4972_3be0,
    0xc7ab_b4d8_d81f_c7b4, 0x1543_faac_acb9_15fa, 0x09fd_07f3_f3fa_0907, 0x6f85_25cf_cfa0_6f25,
    0xea8f_afca_ca20_eaaf, 0x89f3_8ef4_f47d_898e, 0x208e_e947_4767_20e9, 0x2820_1810_1038_2818,
    0x64de_d56f_6f0b_64d5, 0x83fb_88f0_f073_8388, 0xb194_6f4a_4afb_b16f, 0x96b8_725c_5cca_9672,
    0x6c70_2438_3854_6c24, 0x08ae_f157_575f_08f1, 0x52e6_c773_7321_52c7, 0xf335_5197_9764_f351,
    0x658d_23cb_cbae_6523, 0x8459_7ca1_a125_847c, 0xbfcb_9ce8_e857_bf9c, 0x637c_213e_3e5d_6321,
    0x7c37_dd96_96ea_7cdd, 0x7fc2_dc61_611e_7fdc, 0x911a_860d_0d9c_9186, 0x941e_850f_0f9b_9485,
    0xabdb_90e0_e04b_ab90, 0xc6f8_427c_7cba_c642, 0x57e2_c471_7126_57c4, 0xe583_aacc_cc29_e5aa,
    0x733b_d890_90e3_73d8, 0x0f0c_0506_0609_0f05, 0x03f5_01f7_f7f4_0301, 0x3638_121c_1c2a_3612,
    0xfe9f_a3c2_c23c_fea3, 0xe1d4_5f6a_6a8b_e15f, 0x1047_f9ae_aebe_10f9, 0x6bd2_d069_6902_6bd0,
    0xa82e_9117_17bf_a891, 0xe829_5899_9971_e858, 0x6974_273a_3a53_6927, 0xd04e_b927_27f7_d0b9,
    0x48a9_38d9_d991_4838, 0x35cd_13eb_ebde_3513, 0xce56_b32b_2be5_ceb3, 0x5544_3322_2277_5533,
    0xd6bf_bbd2_d204_d6bb, 0x9049_70a9_a939_9070, 0x800e_8907_0787_8089, 0xf266_a733_33c1_f2a7,
    0xc15a_b62d_2dec_c1b6, 0x6678_223c_3c5a_6622, 0xad2a_9215_15b8_ad92, 0x6089_20c9_c9a9_6020,
    0xdb15_4987_875c_db49, 0x1a4f_ffaa_aab0_1aff, 0x88a0_7850_50d8_8878, 0x8e51_7aa5_a52b_8e7a,
    0x8a06_8f03_0389_8a8f, 0x13b2_f859_594a_13f8, 0x9b12_8009_0992_9b80, 0x3934_171a_1a23_3917,
    0x75ca_da65_6510_75da, 0x53b5_31d7_d784_5331, 0x5113_c684_84d5_51c6, 0xd3bb_b8d0_d003_d3b8,
    0x5e1f_c382_82dc_5ec3, 0xcb52_b029_29e2_cbb0, 0x99b4_775a_5ac3_9977, 0x333c_111e_1e2d_3311,
    0x46f6_cb7b_7b3d_46cb, 0x1f4b_fca8_a8b7_1ffc, 0x61da_d66d_6d0c_61d6, 0x4e58_3a2c_2c62_4e3a,
];
