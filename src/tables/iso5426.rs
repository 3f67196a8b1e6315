//! ISO-5426 (MAB2) character table.
//!
//! Combining diacritics occupy `0xC0..=0xDF`; precomposed letters are stored
//! as diacritic byte(s) followed by the base letter byte.

/// Unicode scalar value to legacy byte sequence, in declaration order.
///
/// Order is significant: when two scalar values share a byte sequence the
/// earlier entry becomes the decode target.
#[rustfmt::skip]
pub(crate) static ISO5426_ENTRIES: &[(char, &[u8])] = &[
    ('\u{001d}', b"\x1d"), // <control>
    ('\u{001e}', b"\x1e"), // <control>
    ('\u{001f}', b"\x1f"), // <control>
    ('\u{0020}', b" "), // SPACE
    ('\u{0021}', b"!"), // EXCLAMATION MARK
    ('\u{0022}', b"\x22"), // QUOTATION MARK
    ('\u{0023}', b"#"), // NUMBER SIGN
    ('\u{0024}', b"\xa4"), // DOLLAR SIGN
    ('\u{0025}', b"%"), // PERCENT SIGN
    ('\u{0026}', b"&"), // AMPERSAND
    ('\u{0027}', b"'"), // APOSTROPHE
    ('\u{0028}', b"("), // LEFT PARENTHESIS
    ('\u{0029}', b")"), // RIGHT PARENTHESIS
    ('\u{002a}', b"*"), // ASTERISK
    ('\u{002b}', b"+"), // PLUS SIGN
    ('\u{002c}', b","), // COMMA
    ('\u{002d}', b"-"), // HYPHEN-MINUS
    ('\u{002e}', b"."), // FULL STOP
    ('\u{002f}', b"/"), // SOLIDUS
    ('\u{0030}', b"0"), // DIGIT ZERO
    ('\u{0031}', b"1"), // DIGIT ONE
    ('\u{0032}', b"2"), // DIGIT TWO
    ('\u{0033}', b"3"), // DIGIT THREE
    ('\u{0034}', b"4"), // DIGIT FOUR
    ('\u{0035}', b"5"), // DIGIT FIVE
    ('\u{0036}', b"6"), // DIGIT SIX
    ('\u{0037}', b"7"), // DIGIT SEVEN
    ('\u{0038}', b"8"), // DIGIT EIGHT
    ('\u{0039}', b"9"), // DIGIT NINE
    ('\u{003a}', b":"), // COLON
    ('\u{003b}', b";"), // SEMICOLON
    ('\u{003c}', b"<"), // LESS-THAN SIGN
    ('\u{003d}', b"="), // EQUALS SIGN
    ('\u{003e}', b">"), // GREATER-THAN SIGN
    ('\u{003f}', b"?"), // QUESTION MARK
    ('\u{0040}', b"@"), // COMMERCIAL AT
    ('\u{0041}', b"A"), // LATIN CAPITAL LETTER A
    ('\u{0042}', b"B"), // LATIN CAPITAL LETTER B
    ('\u{0043}', b"C"), // LATIN CAPITAL LETTER C
    ('\u{0044}', b"D"), // LATIN CAPITAL LETTER D
    ('\u{0045}', b"E"), // LATIN CAPITAL LETTER E
    ('\u{0046}', b"F"), // LATIN CAPITAL LETTER F
    ('\u{0047}', b"G"), // LATIN CAPITAL LETTER G
    ('\u{0048}', b"H"), // LATIN CAPITAL LETTER H
    ('\u{0049}', b"I"), // LATIN CAPITAL LETTER I
    ('\u{004a}', b"J"), // LATIN CAPITAL LETTER J
    ('\u{004b}', b"K"), // LATIN CAPITAL LETTER K
    ('\u{004c}', b"L"), // LATIN CAPITAL LETTER L
    ('\u{004d}', b"M"), // LATIN CAPITAL LETTER M
    ('\u{004e}', b"N"), // LATIN CAPITAL LETTER N
    ('\u{004f}', b"O"), // LATIN CAPITAL LETTER O
    ('\u{0050}', b"P"), // LATIN CAPITAL LETTER P
    ('\u{0051}', b"Q"), // LATIN CAPITAL LETTER Q
    ('\u{0052}', b"R"), // LATIN CAPITAL LETTER R
    ('\u{0053}', b"S"), // LATIN CAPITAL LETTER S
    ('\u{0054}', b"T"), // LATIN CAPITAL LETTER T
    ('\u{0055}', b"U"), // LATIN CAPITAL LETTER U
    ('\u{0056}', b"V"), // LATIN CAPITAL LETTER V
    ('\u{0057}', b"W"), // LATIN CAPITAL LETTER W
    ('\u{0058}', b"X"), // LATIN CAPITAL LETTER X
    ('\u{0059}', b"Y"), // LATIN CAPITAL LETTER Y
    ('\u{005a}', b"Z"), // LATIN CAPITAL LETTER Z
    ('\u{005b}', b"["), // LEFT SQUARE BRACKET
    ('\u{005c}', b"\x5c"), // REVERSE SOLIDUS
    ('\u{005d}', b"]"), // RIGHT SQUARE BRACKET
    ('\u{005e}', b"^"), // CIRCUMFLEX ACCENT
    ('\u{005f}', b"_"), // LOW LINE
    ('\u{0060}', b"`"), // GRAVE ACCENT
    ('\u{0061}', b"a"), // LATIN SMALL LETTER A
    ('\u{0062}', b"b"), // LATIN SMALL LETTER B
    ('\u{0063}', b"c"), // LATIN SMALL LETTER C
    ('\u{0064}', b"d"), // LATIN SMALL LETTER D
    ('\u{0065}', b"e"), // LATIN SMALL LETTER E
    ('\u{0066}', b"f"), // LATIN SMALL LETTER F
    ('\u{0067}', b"g"), // LATIN SMALL LETTER G
    ('\u{0068}', b"h"), // LATIN SMALL LETTER H
    ('\u{0069}', b"i"), // LATIN SMALL LETTER I
    ('\u{006a}', b"j"), // LATIN SMALL LETTER J
    ('\u{006b}', b"k"), // LATIN SMALL LETTER K
    ('\u{006c}', b"l"), // LATIN SMALL LETTER L
    ('\u{006d}', b"m"), // LATIN SMALL LETTER M
    ('\u{006e}', b"n"), // LATIN SMALL LETTER N
    ('\u{006f}', b"o"), // LATIN SMALL LETTER O
    ('\u{0070}', b"p"), // LATIN SMALL LETTER P
    ('\u{0071}', b"q"), // LATIN SMALL LETTER Q
    ('\u{0072}', b"r"), // LATIN SMALL LETTER R
    ('\u{0073}', b"s"), // LATIN SMALL LETTER S
    ('\u{0074}', b"t"), // LATIN SMALL LETTER T
    ('\u{0075}', b"u"), // LATIN SMALL LETTER U
    ('\u{0076}', b"v"), // LATIN SMALL LETTER V
    ('\u{0077}', b"w"), // LATIN SMALL LETTER W
    ('\u{0078}', b"x"), // LATIN SMALL LETTER X
    ('\u{0079}', b"y"), // LATIN SMALL LETTER Y
    ('\u{007a}', b"z"), // LATIN SMALL LETTER Z
    ('\u{007b}', b"{"), // LEFT CURLY BRACKET
    ('\u{007c}', b"|"), // VERTICAL LINE
    ('\u{007d}', b"}"), // RIGHT CURLY BRACKET
    ('\u{007e}', b"~"), // TILDE
    ('\u{0088}', b"\x88"), // <control>
    ('\u{0089}', b"\x89"), // <control>
    ('\u{00a1}', b"\xa1"), // INVERTED EXCLAMATION MARK
    ('\u{00a3}', b"\xa3"), // POUND SIGN
    ('\u{00a5}', b"\xa5"), // YEN SIGN
    ('\u{00a7}', b"\xa7"), // SECTION SIGN
    ('\u{00a9}', b"\xad"), // COPYRIGHT SIGN
    ('\u{00ab}', b"\xab"), // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{00ae}', b"\xaf"), // REGISTERED SIGN
    ('\u{00b7}', b"\xb7"), // MIDDLE DOT
    ('\u{00bb}', b"\xbb"), // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{00bf}', b"\xbf"), // INVERTED QUESTION MARK
    ('\u{00c0}', b"\xc1A"), // LATIN CAPITAL LETTER A WITH GRAVE
    ('\u{00c1}', b"\xc2A"), // LATIN CAPITAL LETTER A WITH ACUTE
    ('\u{00c2}', b"\xc3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX
    ('\u{00c3}', b"\xc4A"), // LATIN CAPITAL LETTER A WITH TILDE
    ('\u{00c4}', b"\xc8A"), // LATIN CAPITAL LETTER A WITH DIAERESIS
    ('\u{00c5}', b"\xcaA"), // LATIN CAPITAL LETTER A WITH RING ABOVE
    ('\u{00c6}', b"\xe1"), // LATIN CAPITAL LETTER AE
    ('\u{00c7}', b"\xd0C"), // LATIN CAPITAL LETTER C WITH CEDILLA
    ('\u{00c8}', b"\xc1E"), // LATIN CAPITAL LETTER E WITH GRAVE
    ('\u{00c9}', b"\xc2E"), // LATIN CAPITAL LETTER E WITH ACUTE
    ('\u{00ca}', b"\xc3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX
    ('\u{00cb}', b"\xc8E"), // LATIN CAPITAL LETTER E WITH DIAERESIS
    ('\u{00cc}', b"\xc1I"), // LATIN CAPITAL LETTER I WITH GRAVE
    ('\u{00cd}', b"\xc2I"), // LATIN CAPITAL LETTER I WITH ACUTE
    ('\u{00ce}', b"\xc3I"), // LATIN CAPITAL LETTER I WITH CIRCUMFLEX
    ('\u{00cf}', b"\xc8I"), // LATIN CAPITAL LETTER I WITH DIAERESIS
    ('\u{00d1}', b"\xc4N"), // LATIN CAPITAL LETTER N WITH TILDE
    ('\u{00d2}', b"\xc1O"), // LATIN CAPITAL LETTER O WITH GRAVE
    ('\u{00d3}', b"\xc2O"), // LATIN CAPITAL LETTER O WITH ACUTE
    ('\u{00d4}', b"\xc3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX
    ('\u{00d5}', b"\xc4O"), // LATIN CAPITAL LETTER O WITH TILDE
    ('\u{00d6}', b"\xc8O"), // LATIN CAPITAL LETTER O WITH DIAERESIS
    ('\u{00d8}', b"\xe9"), // LATIN CAPITAL LETTER O WITH STROKE
    ('\u{00d9}', b"\xc1U"), // LATIN CAPITAL LETTER U WITH GRAVE
    ('\u{00da}', b"\xc2U"), // LATIN CAPITAL LETTER U WITH ACUTE
    ('\u{00db}', b"\xc3U"), // LATIN CAPITAL LETTER U WITH CIRCUMFLEX
    ('\u{00dc}', b"\xc8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS
    ('\u{00dd}', b"\xc2Y"), // LATIN CAPITAL LETTER Y WITH ACUTE
    ('\u{00de}', b"\xec"), // LATIN CAPITAL LETTER THORN
    ('\u{00df}', b"\xfb"), // LATIN SMALL LETTER SHARP S
    ('\u{00e0}', b"\xc1a"), // LATIN SMALL LETTER A WITH GRAVE
    ('\u{00e1}', b"\xc2a"), // LATIN SMALL LETTER A WITH ACUTE
    ('\u{00e2}', b"\xc3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX
    ('\u{00e3}', b"\xc4a"), // LATIN SMALL LETTER A WITH TILDE
    ('\u{00e4}', b"\xc8a"), // LATIN SMALL LETTER A WITH DIAERESIS
    ('\u{00e5}', b"\xcaa"), // LATIN SMALL LETTER A WITH RING ABOVE
    ('\u{00e6}', b"\xf1"), // LATIN SMALL LETTER AE
    ('\u{00e7}', b"\xd0c"), // LATIN SMALL LETTER C WITH CEDILLA
    ('\u{00e8}', b"\xc1e"), // LATIN SMALL LETTER E WITH GRAVE
    ('\u{00e9}', b"\xc2e"), // LATIN SMALL LETTER E WITH ACUTE
    ('\u{00ea}', b"\xc3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX
    ('\u{00eb}', b"\xc8e"), // LATIN SMALL LETTER E WITH DIAERESIS
    ('\u{00ec}', b"\xc1i"), // LATIN SMALL LETTER I WITH GRAVE
    ('\u{00ed}', b"\xc2i"), // LATIN SMALL LETTER I WITH ACUTE
    ('\u{00ee}', b"\xc3i"), // LATIN SMALL LETTER I WITH CIRCUMFLEX
    ('\u{00ef}', b"\xc8i"), // LATIN SMALL LETTER I WITH DIAERESIS
    ('\u{00f0}', b"\xf3"), // LATIN SMALL LETTER ETH
    ('\u{00f1}', b"\xc4n"), // LATIN SMALL LETTER N WITH TILDE
    ('\u{00f2}', b"\xc1o"), // LATIN SMALL LETTER O WITH GRAVE
    ('\u{00f3}', b"\xc2o"), // LATIN SMALL LETTER O WITH ACUTE
    ('\u{00f4}', b"\xc3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX
    ('\u{00f5}', b"\xc4o"), // LATIN SMALL LETTER O WITH TILDE
    ('\u{00f6}', b"\xc8o"), // LATIN SMALL LETTER O WITH DIAERESIS
    ('\u{00f8}', b"\xf9"), // LATIN SMALL LETTER O WITH STROKE
    ('\u{00f9}', b"\xc1u"), // LATIN SMALL LETTER U WITH GRAVE
    ('\u{00fa}', b"\xc2u"), // LATIN SMALL LETTER U WITH ACUTE
    ('\u{00fb}', b"\xc3u"), // LATIN SMALL LETTER U WITH CIRCUMFLEX
    ('\u{00fc}', b"\xc8u"), // LATIN SMALL LETTER U WITH DIAERESIS
    ('\u{00fd}', b"\xc2y"), // LATIN SMALL LETTER Y WITH ACUTE
    ('\u{00fe}', b"\xfc"), // LATIN SMALL LETTER THORN
    ('\u{00ff}', b"\xc8y"), // LATIN SMALL LETTER Y WITH DIAERESIS
    ('\u{0100}', b"\xc5A"), // LATIN CAPITAL LETTER A WITH MACRON
    ('\u{0101}', b"\xc5a"), // LATIN SMALL LETTER A WITH MACRON
    ('\u{0102}', b"\xc6A"), // LATIN CAPITAL LETTER A WITH BREVE
    ('\u{0103}', b"\xc6a"), // LATIN SMALL LETTER A WITH BREVE
    ('\u{0104}', b"\xd3A"), // LATIN CAPITAL LETTER A WITH OGONEK
    ('\u{0105}', b"\xd3a"), // LATIN SMALL LETTER A WITH OGONEK
    ('\u{0106}', b"\xc2C"), // LATIN CAPITAL LETTER C WITH ACUTE
    ('\u{0107}', b"\xc2c"), // LATIN SMALL LETTER C WITH ACUTE
    ('\u{0108}', b"\xc3C"), // LATIN CAPITAL LETTER C WITH CIRCUMFLEX
    ('\u{0109}', b"\xc3c"), // LATIN SMALL LETTER C WITH CIRCUMFLEX
    ('\u{010a}', b"\xc7C"), // LATIN CAPITAL LETTER C WITH DOT ABOVE
    ('\u{010b}', b"\xc7c"), // LATIN SMALL LETTER C WITH DOT ABOVE
    ('\u{010c}', b"\xcfC"), // LATIN CAPITAL LETTER C WITH CARON
    ('\u{010d}', b"\xcfc"), // LATIN SMALL LETTER C WITH CARON
    ('\u{010e}', b"\xcfD"), // LATIN CAPITAL LETTER D WITH CARON
    ('\u{010f}', b"\xcfd"), // LATIN SMALL LETTER D WITH CARON
    ('\u{0110}', b"\xe2"), // LATIN CAPITAL LETTER D WITH STROKE
    ('\u{0111}', b"\xf2"), // LATIN SMALL LETTER D WITH STROKE
    ('\u{0112}', b"\xc5E"), // LATIN CAPITAL LETTER E WITH MACRON
    ('\u{0113}', b"\xc5e"), // LATIN SMALL LETTER E WITH MACRON
    ('\u{0114}', b"\xc6E"), // LATIN CAPITAL LETTER E WITH BREVE
    ('\u{0115}', b"\xc6e"), // LATIN SMALL LETTER E WITH BREVE
    ('\u{0116}', b"\xc7E"), // LATIN CAPITAL LETTER E WITH DOT ABOVE
    ('\u{0117}', b"\xc7e"), // LATIN SMALL LETTER E WITH DOT ABOVE
    ('\u{0118}', b"\xd3E"), // LATIN CAPITAL LETTER E WITH OGONEK
    ('\u{0119}', b"\xd3e"), // LATIN SMALL LETTER E WITH OGONEK
    ('\u{011a}', b"\xcfE"), // LATIN CAPITAL LETTER E WITH CARON
    ('\u{011b}', b"\xcfe"), // LATIN SMALL LETTER E WITH CARON
    ('\u{011c}', b"\xc3G"), // LATIN CAPITAL LETTER G WITH CIRCUMFLEX
    ('\u{011d}', b"\xc3g"), // LATIN SMALL LETTER G WITH CIRCUMFLEX
    ('\u{011e}', b"\xc6G"), // LATIN CAPITAL LETTER G WITH BREVE
    ('\u{011f}', b"\xc6g"), // LATIN SMALL LETTER G WITH BREVE
    ('\u{0120}', b"\xc7G"), // LATIN CAPITAL LETTER G WITH DOT ABOVE
    ('\u{0121}', b"\xc7g"), // LATIN SMALL LETTER G WITH DOT ABOVE
    ('\u{0122}', b"\xd0G"), // LATIN CAPITAL LETTER G WITH CEDILLA
    ('\u{0123}', b"\xd0g"), // LATIN SMALL LETTER G WITH CEDILLA
    ('\u{0124}', b"\xc3H"), // LATIN CAPITAL LETTER H WITH CIRCUMFLEX
    ('\u{0125}', b"\xc3h"), // LATIN SMALL LETTER H WITH CIRCUMFLEX
    ('\u{0128}', b"\xc4I"), // LATIN CAPITAL LETTER I WITH TILDE
    ('\u{0129}', b"\xc4i"), // LATIN SMALL LETTER I WITH TILDE
    ('\u{012a}', b"\xc5I"), // LATIN CAPITAL LETTER I WITH MACRON
    ('\u{012b}', b"\xc5i"), // LATIN SMALL LETTER I WITH MACRON
    ('\u{012c}', b"\xc6I"), // LATIN CAPITAL LETTER I WITH BREVE
    ('\u{012d}', b"\xc6i"), // LATIN SMALL LETTER I WITH BREVE
    ('\u{012e}', b"\xd3I"), // LATIN CAPITAL LETTER I WITH OGONEK
    ('\u{012f}', b"\xd3i"), // LATIN SMALL LETTER I WITH OGONEK
    ('\u{0130}', b"\xc7I"), // LATIN CAPITAL LETTER I WITH DOT ABOVE
    ('\u{0131}', b"\xf5"), // LATIN SMALL LETTER DOTLESS I
    ('\u{0132}', b"\xe6"), // LATIN CAPITAL LIGATURE IJ
    ('\u{0133}', b"\xf6"), // LATIN SMALL LIGATURE IJ
    ('\u{0134}', b"\xc3J"), // LATIN CAPITAL LETTER J WITH CIRCUMFLEX
    ('\u{0135}', b"\xc3j"), // LATIN SMALL LETTER J WITH CIRCUMFLEX
    ('\u{0136}', b"\xd0K"), // LATIN CAPITAL LETTER K WITH CEDILLA
    ('\u{0137}', b"\xd0k"), // LATIN SMALL LETTER K WITH CEDILLA
    ('\u{0139}', b"\xc2L"), // LATIN CAPITAL LETTER L WITH ACUTE
    ('\u{013a}', b"\xc2l"), // LATIN SMALL LETTER L WITH ACUTE
    ('\u{013b}', b"\xd0L"), // LATIN CAPITAL LETTER L WITH CEDILLA
    ('\u{013c}', b"\xd0l"), // LATIN SMALL LETTER L WITH CEDILLA
    ('\u{013d}', b"\xcfL"), // LATIN CAPITAL LETTER L WITH CARON
    ('\u{013e}', b"\xcfl"), // LATIN SMALL LETTER L WITH CARON
    ('\u{0141}', b"\xe8"), // LATIN CAPITAL LETTER L WITH STROKE
    ('\u{0142}', b"\xf8"), // LATIN SMALL LETTER L WITH STROKE
    ('\u{0143}', b"\xc2N"), // LATIN CAPITAL LETTER N WITH ACUTE
    ('\u{0144}', b"\xc2n"), // LATIN SMALL LETTER N WITH ACUTE
    ('\u{0145}', b"\xd0N"), // LATIN CAPITAL LETTER N WITH CEDILLA
    ('\u{0146}', b"\xd0n"), // LATIN SMALL LETTER N WITH CEDILLA
    ('\u{0147}', b"\xcfN"), // LATIN CAPITAL LETTER N WITH CARON
    ('\u{0148}', b"\xcfn"), // LATIN SMALL LETTER N WITH CARON
    ('\u{014c}', b"\xc5O"), // LATIN CAPITAL LETTER O WITH MACRON
    ('\u{014d}', b"\xc5o"), // LATIN SMALL LETTER O WITH MACRON
    ('\u{014e}', b"\xc6O"), // LATIN CAPITAL LETTER O WITH BREVE
    ('\u{014f}', b"\xc6o"), // LATIN SMALL LETTER O WITH BREVE
    ('\u{0150}', b"\xcdO"), // LATIN CAPITAL LETTER O WITH DOUBLE ACUTE
    ('\u{0151}', b"\xcdo"), // LATIN SMALL LETTER O WITH DOUBLE ACUTE
    ('\u{0152}', b"\xea"), // LATIN CAPITAL LIGATURE OE
    ('\u{0153}', b"\xfa"), // LATIN SMALL LIGATURE OE
    ('\u{0154}', b"\xc2R"), // LATIN CAPITAL LETTER R WITH ACUTE
    ('\u{0155}', b"\xc2r"), // LATIN SMALL LETTER R WITH ACUTE
    ('\u{0156}', b"\xd0R"), // LATIN CAPITAL LETTER R WITH CEDILLA
    ('\u{0157}', b"\xd0r"), // LATIN SMALL LETTER R WITH CEDILLA
    ('\u{0158}', b"\xcfR"), // LATIN CAPITAL LETTER R WITH CARON
    ('\u{0159}', b"\xcfr"), // LATIN SMALL LETTER R WITH CARON
    ('\u{015a}', b"\xc2S"), // LATIN CAPITAL LETTER S WITH ACUTE
    ('\u{015b}', b"\xc2s"), // LATIN SMALL LETTER S WITH ACUTE
    ('\u{015c}', b"\xc3S"), // LATIN CAPITAL LETTER S WITH CIRCUMFLEX
    ('\u{015d}', b"\xc3s"), // LATIN SMALL LETTER S WITH CIRCUMFLEX
    ('\u{015e}', b"\xd0S"), // LATIN CAPITAL LETTER S WITH CEDILLA
    ('\u{015f}', b"\xd0s"), // LATIN SMALL LETTER S WITH CEDILLA
    ('\u{0160}', b"\xcfS"), // LATIN CAPITAL LETTER S WITH CARON
    ('\u{0161}', b"\xcfs"), // LATIN SMALL LETTER S WITH CARON
    ('\u{0162}', b"\xd0T"), // LATIN CAPITAL LETTER T WITH CEDILLA
    ('\u{0163}', b"\xd0t"), // LATIN SMALL LETTER T WITH CEDILLA
    ('\u{0164}', b"\xcfT"), // LATIN CAPITAL LETTER T WITH CARON
    ('\u{0165}', b"\xcft"), // LATIN SMALL LETTER T WITH CARON
    ('\u{0168}', b"\xc4U"), // LATIN CAPITAL LETTER U WITH TILDE
    ('\u{0169}', b"\xc4u"), // LATIN SMALL LETTER U WITH TILDE
    ('\u{016a}', b"\xc5U"), // LATIN CAPITAL LETTER U WITH MACRON
    ('\u{016b}', b"\xc5u"), // LATIN SMALL LETTER U WITH MACRON
    ('\u{016c}', b"\xc6U"), // LATIN CAPITAL LETTER U WITH BREVE
    ('\u{016d}', b"\xc6u"), // LATIN SMALL LETTER U WITH BREVE
    ('\u{016e}', b"\xcaU"), // LATIN CAPITAL LETTER U WITH RING ABOVE
    ('\u{016f}', b"\xcau"), // LATIN SMALL LETTER U WITH RING ABOVE
    ('\u{0170}', b"\xcdU"), // LATIN CAPITAL LETTER U WITH DOUBLE ACUTE
    ('\u{0171}', b"\xcdu"), // LATIN SMALL LETTER U WITH DOUBLE ACUTE
    ('\u{0172}', b"\xd3U"), // LATIN CAPITAL LETTER U WITH OGONEK
    ('\u{0173}', b"\xd3u"), // LATIN SMALL LETTER U WITH OGONEK
    ('\u{0174}', b"\xc3W"), // LATIN CAPITAL LETTER W WITH CIRCUMFLEX
    ('\u{0175}', b"\xc3w"), // LATIN SMALL LETTER W WITH CIRCUMFLEX
    ('\u{0176}', b"\xc3Y"), // LATIN CAPITAL LETTER Y WITH CIRCUMFLEX
    ('\u{0177}', b"\xc3y"), // LATIN SMALL LETTER Y WITH CIRCUMFLEX
    ('\u{0178}', b"\xc8Y"), // LATIN CAPITAL LETTER Y WITH DIAERESIS
    ('\u{0179}', b"\xc2Z"), // LATIN CAPITAL LETTER Z WITH ACUTE
    ('\u{017a}', b"\xc2z"), // LATIN SMALL LETTER Z WITH ACUTE
    ('\u{017b}', b"\xc7Z"), // LATIN CAPITAL LETTER Z WITH DOT ABOVE
    ('\u{017c}', b"\xc7z"), // LATIN SMALL LETTER Z WITH DOT ABOVE
    ('\u{017d}', b"\xcfZ"), // LATIN CAPITAL LETTER Z WITH CARON
    ('\u{017e}', b"\xcfz"), // LATIN SMALL LETTER Z WITH CARON
    ('\u{01a0}', b"\xceO"), // LATIN CAPITAL LETTER O WITH HORN
    ('\u{01a1}', b"\xceo"), // LATIN SMALL LETTER O WITH HORN
    ('\u{01af}', b"\xceU"), // LATIN CAPITAL LETTER U WITH HORN
    ('\u{01b0}', b"\xceu"), // LATIN SMALL LETTER U WITH HORN
    ('\u{01cd}', b"\xcfA"), // LATIN CAPITAL LETTER A WITH CARON
    ('\u{01ce}', b"\xcfa"), // LATIN SMALL LETTER A WITH CARON
    ('\u{01cf}', b"\xcfI"), // LATIN CAPITAL LETTER I WITH CARON
    ('\u{01d0}', b"\xcfi"), // LATIN SMALL LETTER I WITH CARON
    ('\u{01d1}', b"\xcfO"), // LATIN CAPITAL LETTER O WITH CARON
    ('\u{01d2}', b"\xcfo"), // LATIN SMALL LETTER O WITH CARON
    ('\u{01d3}', b"\xcfU"), // LATIN CAPITAL LETTER U WITH CARON
    ('\u{01d4}', b"\xcfu"), // LATIN SMALL LETTER U WITH CARON
    ('\u{01d5}', b"\xc5\xc8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND MACRON
    ('\u{01d6}', b"\xc5\xc8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND MACRON
    ('\u{01d7}', b"\xc2\xc8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND ACUTE
    ('\u{01d8}', b"\xc2\xc8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND ACUTE
    ('\u{01d9}', b"\xcf\xc8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND CARON
    ('\u{01da}', b"\xcf\xc8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND CARON
    ('\u{01db}', b"\xc1\xc8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND GRAVE
    ('\u{01dc}', b"\xc1\xc8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND GRAVE
    ('\u{01de}', b"\xc5\xc8A"), // LATIN CAPITAL LETTER A WITH DIAERESIS AND MACRON
    ('\u{01df}', b"\xc5\xc8a"), // LATIN SMALL LETTER A WITH DIAERESIS AND MACRON
    ('\u{01e0}', b"\xc5\xc7A"), // LATIN CAPITAL LETTER A WITH DOT ABOVE AND MACRON
    ('\u{01e1}', b"\xc5\xc7a"), // LATIN SMALL LETTER A WITH DOT ABOVE AND MACRON
    ('\u{01e2}', b"\xc5\xe1"), // LATIN CAPITAL LETTER AE WITH MACRON
    ('\u{01e3}', b"\xc5\xf1"), // LATIN SMALL LETTER AE WITH MACRON
    ('\u{01e6}', b"\xcfG"), // LATIN CAPITAL LETTER G WITH CARON
    ('\u{01e7}', b"\xcfg"), // LATIN SMALL LETTER G WITH CARON
    ('\u{01e8}', b"\xcfK"), // LATIN CAPITAL LETTER K WITH CARON
    ('\u{01e9}', b"\xcfk"), // LATIN SMALL LETTER K WITH CARON
    ('\u{01ea}', b"\xd3O"), // LATIN CAPITAL LETTER O WITH OGONEK
    ('\u{01eb}', b"\xd3o"), // LATIN SMALL LETTER O WITH OGONEK
    ('\u{01ec}', b"\xc5\xd3O"), // LATIN CAPITAL LETTER O WITH OGONEK AND MACRON
    ('\u{01ed}', b"\xc5\xd3o"), // LATIN SMALL LETTER O WITH OGONEK AND MACRON
    ('\u{01f0}', b"\xcfj"), // LATIN SMALL LETTER J WITH CARON
    ('\u{01f4}', b"\xc2G"), // LATIN CAPITAL LETTER G WITH ACUTE
    ('\u{01f5}', b"\xc2g"), // LATIN SMALL LETTER G WITH ACUTE
    ('\u{01f8}', b"\xc1N"), // LATIN CAPITAL LETTER N WITH GRAVE
    ('\u{01f9}', b"\xc1n"), // LATIN SMALL LETTER N WITH GRAVE
    ('\u{01fa}', b"\xc2\xcaA"), // LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE
    ('\u{01fb}', b"\xc2\xcaa"), // LATIN SMALL LETTER A WITH RING ABOVE AND ACUTE
    ('\u{01fc}', b"\xc2\xe1"), // LATIN CAPITAL LETTER AE WITH ACUTE
    ('\u{01fd}', b"\xc2\xf1"), // LATIN SMALL LETTER AE WITH ACUTE
    ('\u{01fe}', b"\xc2\xe9"), // LATIN CAPITAL LETTER O WITH STROKE AND ACUTE
    ('\u{01ff}', b"\xc2\xf9"), // LATIN SMALL LETTER O WITH STROKE AND ACUTE
    ('\u{0218}', b"\xd2S"), // LATIN CAPITAL LETTER S WITH COMMA BELOW
    ('\u{0219}', b"\xd2s"), // LATIN SMALL LETTER S WITH COMMA BELOW
    ('\u{021a}', b"\xd2T"), // LATIN CAPITAL LETTER T WITH COMMA BELOW
    ('\u{021b}', b"\xd2t"), // LATIN SMALL LETTER T WITH COMMA BELOW
    ('\u{021e}', b"\xcfH"), // LATIN CAPITAL LETTER H WITH CARON
    ('\u{021f}', b"\xcfh"), // LATIN SMALL LETTER H WITH CARON
    ('\u{0226}', b"\xc7A"), // LATIN CAPITAL LETTER A WITH DOT ABOVE
    ('\u{0227}', b"\xc7a"), // LATIN SMALL LETTER A WITH DOT ABOVE
    ('\u{0228}', b"\xd0E"), // LATIN CAPITAL LETTER E WITH CEDILLA
    ('\u{0229}', b"\xd0e"), // LATIN SMALL LETTER E WITH CEDILLA
    ('\u{022a}', b"\xc5\xc8O"), // LATIN CAPITAL LETTER O WITH DIAERESIS AND MACRON
    ('\u{022b}', b"\xc5\xc8o"), // LATIN SMALL LETTER O WITH DIAERESIS AND MACRON
    ('\u{022c}', b"\xc5\xc4O"), // LATIN CAPITAL LETTER O WITH TILDE AND MACRON
    ('\u{022d}', b"\xc5\xc4o"), // LATIN SMALL LETTER O WITH TILDE AND MACRON
    ('\u{022e}', b"\xc7O"), // LATIN CAPITAL LETTER O WITH DOT ABOVE
    ('\u{022f}', b"\xc7o"), // LATIN SMALL LETTER O WITH DOT ABOVE
    ('\u{0230}', b"\xc5\xc7O"), // LATIN CAPITAL LETTER O WITH DOT ABOVE AND MACRON
    ('\u{0231}', b"\xc5\xc7o"), // LATIN SMALL LETTER O WITH DOT ABOVE AND MACRON
    ('\u{0232}', b"\xc5Y"), // LATIN CAPITAL LETTER Y WITH MACRON
    ('\u{0233}', b"\xc5y"), // LATIN SMALL LETTER Y WITH MACRON
    ('\u{02b9}', b"\xbd"), // MODIFIER LETTER PRIME
    ('\u{02ba}', b"\xbe"), // MODIFIER LETTER DOUBLE PRIME
    ('\u{02bb}', b"\xb0"), // MODIFIER LETTER TURNED COMMA
    ('\u{02bc}', b"\xb1"), // MODIFIER LETTER APOSTROPHE
    ('\u{0300}', b"\xc1"), // COMBINING GRAVE ACCENT
    ('\u{0301}', b"\xc2"), // COMBINING ACUTE ACCENT
    ('\u{0302}', b"\xc3"), // COMBINING CIRCUMFLEX ACCENT
    ('\u{0303}', b"\xc4"), // COMBINING TILDE
    ('\u{0304}', b"\xc5"), // COMBINING MACRON
    ('\u{0306}', b"\xc6"), // COMBINING BREVE
    ('\u{0307}', b"\xc7"), // COMBINING DOT ABOVE
    ('\u{0308}', b"\xc8"), // COMBINING DIAERESIS
    ('\u{0309}', b"\xc0"), // COMBINING HOOK ABOVE
    ('\u{030a}', b"\xca"), // COMBINING RING ABOVE
    ('\u{030b}', b"\xcd"), // COMBINING DOUBLE ACUTE ACCENT
    ('\u{030c}', b"\xcf"), // COMBINING CARON
    ('\u{0312}', b"\xcc"), // COMBINING TURNED COMMA ABOVE
    ('\u{0315}', b"\xcb"), // COMBINING COMMA ABOVE RIGHT
    ('\u{031b}', b"\xce"), // COMBINING HORN
    ('\u{031c}', b"\xd1"), // COMBINING LEFT HALF RING BELOW
    ('\u{0323}', b"\xd6"), // COMBINING DOT BELOW
    ('\u{0324}', b"\xd7"), // COMBINING DIAERESIS BELOW
    ('\u{0325}', b"\xd4"), // COMBINING RING BELOW
    ('\u{0326}', b"\xd2"), // COMBINING COMMA BELOW
    ('\u{0327}', b"\xd0"), // COMBINING CEDILLA
    ('\u{0328}', b"\xd3"), // COMBINING OGONEK
    ('\u{0329}', b"\xda"), // COMBINING VERTICAL LINE BELOW
    ('\u{032d}', b"\xdb"), // COMBINING CIRCUMFLEX ACCENT BELOW
    ('\u{032e}', b"\xd5"), // COMBINING BREVE BELOW
    ('\u{0332}', b"\xd8"), // COMBINING LOW LINE
    ('\u{0333}', b"\xd9"), // COMBINING DOUBLE LOW LINE
    ('\u{0340}', b"\xc1"), // COMBINING GRAVE TONE MARK
    ('\u{0341}', b"\xc2"), // COMBINING ACUTE TONE MARK
    ('\u{0344}', b"\xc2\xc8"), // COMBINING GREEK DIALYTIKA TONOS
    ('\u{0374}', b"\xbd"), // GREEK NUMERAL SIGN
    ('\u{037e}', b";"), // GREEK QUESTION MARK
    ('\u{0387}', b"\xb7"), // GREEK ANO TELEIA
    ('\u{1e00}', b"\xd4A"), // LATIN CAPITAL LETTER A WITH RING BELOW
    ('\u{1e01}', b"\xd4a"), // LATIN SMALL LETTER A WITH RING BELOW
    ('\u{1e02}', b"\xc7B"), // LATIN CAPITAL LETTER B WITH DOT ABOVE
    ('\u{1e03}', b"\xc7b"), // LATIN SMALL LETTER B WITH DOT ABOVE
    ('\u{1e04}', b"\xd6B"), // LATIN CAPITAL LETTER B WITH DOT BELOW
    ('\u{1e05}', b"\xd6b"), // LATIN SMALL LETTER B WITH DOT BELOW
    ('\u{1e08}', b"\xc2\xd0C"), // LATIN CAPITAL LETTER C WITH CEDILLA AND ACUTE
    ('\u{1e09}', b"\xc2\xd0c"), // LATIN SMALL LETTER C WITH CEDILLA AND ACUTE
    ('\u{1e0a}', b"\xc7D"), // LATIN CAPITAL LETTER D WITH DOT ABOVE
    ('\u{1e0b}', b"\xc7d"), // LATIN SMALL LETTER D WITH DOT ABOVE
    ('\u{1e0c}', b"\xd6D"), // LATIN CAPITAL LETTER D WITH DOT BELOW
    ('\u{1e0d}', b"\xd6d"), // LATIN SMALL LETTER D WITH DOT BELOW
    ('\u{1e10}', b"\xd0D"), // LATIN CAPITAL LETTER D WITH CEDILLA
    ('\u{1e11}', b"\xd0d"), // LATIN SMALL LETTER D WITH CEDILLA
    ('\u{1e12}', b"\xdbD"), // LATIN CAPITAL LETTER D WITH CIRCUMFLEX BELOW
    ('\u{1e13}', b"\xdbd"), // LATIN SMALL LETTER D WITH CIRCUMFLEX BELOW
    ('\u{1e14}', b"\xc1\xc5E"), // LATIN CAPITAL LETTER E WITH MACRON AND GRAVE
    ('\u{1e15}', b"\xc1\xc5e"), // LATIN SMALL LETTER E WITH MACRON AND GRAVE
    ('\u{1e16}', b"\xc2\xc5E"), // LATIN CAPITAL LETTER E WITH MACRON AND ACUTE
    ('\u{1e17}', b"\xc2\xc5e"), // LATIN SMALL LETTER E WITH MACRON AND ACUTE
    ('\u{1e18}', b"\xdbE"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX BELOW
    ('\u{1e19}', b"\xdbe"), // LATIN SMALL LETTER E WITH CIRCUMFLEX BELOW
    ('\u{1e1c}', b"\xc6\xd0E"), // LATIN CAPITAL LETTER E WITH CEDILLA AND BREVE
    ('\u{1e1d}', b"\xc6\xd0e"), // LATIN SMALL LETTER E WITH CEDILLA AND BREVE
    ('\u{1e1e}', b"\xc7F"), // LATIN CAPITAL LETTER F WITH DOT ABOVE
    ('\u{1e1f}', b"\xc7f"), // LATIN SMALL LETTER F WITH DOT ABOVE
    ('\u{1e20}', b"\xc5G"), // LATIN CAPITAL LETTER G WITH MACRON
    ('\u{1e21}', b"\xc5g"), // LATIN SMALL LETTER G WITH MACRON
    ('\u{1e22}', b"\xc7H"), // LATIN CAPITAL LETTER H WITH DOT ABOVE
    ('\u{1e23}', b"\xc7h"), // LATIN SMALL LETTER H WITH DOT ABOVE
    ('\u{1e24}', b"\xd6H"), // LATIN CAPITAL LETTER H WITH DOT BELOW
    ('\u{1e25}', b"\xd6h"), // LATIN SMALL LETTER H WITH DOT BELOW
    ('\u{1e26}', b"\xc8H"), // LATIN CAPITAL LETTER H WITH DIAERESIS
    ('\u{1e27}', b"\xc8h"), // LATIN SMALL LETTER H WITH DIAERESIS
    ('\u{1e28}', b"\xd0H"), // LATIN CAPITAL LETTER H WITH CEDILLA
    ('\u{1e29}', b"\xd0h"), // LATIN SMALL LETTER H WITH CEDILLA
    ('\u{1e2a}', b"\xd5H"), // LATIN CAPITAL LETTER H WITH BREVE BELOW
    ('\u{1e2b}', b"\xd5h"), // LATIN SMALL LETTER H WITH BREVE BELOW
    ('\u{1e2e}', b"\xc2\xc8I"), // LATIN CAPITAL LETTER I WITH DIAERESIS AND ACUTE
    ('\u{1e2f}', b"\xc2\xc8i"), // LATIN SMALL LETTER I WITH DIAERESIS AND ACUTE
    ('\u{1e30}', b"\xc2K"), // LATIN CAPITAL LETTER K WITH ACUTE
    ('\u{1e31}', b"\xc2k"), // LATIN SMALL LETTER K WITH ACUTE
    ('\u{1e32}', b"\xd6K"), // LATIN CAPITAL LETTER K WITH DOT BELOW
    ('\u{1e33}', b"\xd6k"), // LATIN SMALL LETTER K WITH DOT BELOW
    ('\u{1e36}', b"\xd6L"), // LATIN CAPITAL LETTER L WITH DOT BELOW
    ('\u{1e37}', b"\xd6l"), // LATIN SMALL LETTER L WITH DOT BELOW
    ('\u{1e38}', b"\xc5\xd6L"), // LATIN CAPITAL LETTER L WITH DOT BELOW AND MACRON
    ('\u{1e39}', b"\xc5\xd6l"), // LATIN SMALL LETTER L WITH DOT BELOW AND MACRON
    ('\u{1e3c}', b"\xdbL"), // LATIN CAPITAL LETTER L WITH CIRCUMFLEX BELOW
    ('\u{1e3d}', b"\xdbl"), // LATIN SMALL LETTER L WITH CIRCUMFLEX BELOW
    ('\u{1e3e}', b"\xc2M"), // LATIN CAPITAL LETTER M WITH ACUTE
    ('\u{1e3f}', b"\xc2m"), // LATIN SMALL LETTER M WITH ACUTE
    ('\u{1e40}', b"\xc7M"), // LATIN CAPITAL LETTER M WITH DOT ABOVE
    ('\u{1e41}', b"\xc7m"), // LATIN SMALL LETTER M WITH DOT ABOVE
    ('\u{1e42}', b"\xd6M"), // LATIN CAPITAL LETTER M WITH DOT BELOW
    ('\u{1e43}', b"\xd6m"), // LATIN SMALL LETTER M WITH DOT BELOW
    ('\u{1e44}', b"\xc7N"), // LATIN CAPITAL LETTER N WITH DOT ABOVE
    ('\u{1e45}', b"\xc7n"), // LATIN SMALL LETTER N WITH DOT ABOVE
    ('\u{1e46}', b"\xd6N"), // LATIN CAPITAL LETTER N WITH DOT BELOW
    ('\u{1e47}', b"\xd6n"), // LATIN SMALL LETTER N WITH DOT BELOW
    ('\u{1e4a}', b"\xdbN"), // LATIN CAPITAL LETTER N WITH CIRCUMFLEX BELOW
    ('\u{1e4b}', b"\xdbn"), // LATIN SMALL LETTER N WITH CIRCUMFLEX BELOW
    ('\u{1e4c}', b"\xc2\xc4O"), // LATIN CAPITAL LETTER O WITH TILDE AND ACUTE
    ('\u{1e4d}', b"\xc2\xc4o"), // LATIN SMALL LETTER O WITH TILDE AND ACUTE
    ('\u{1e4e}', b"\xc8\xc4O"), // LATIN CAPITAL LETTER O WITH TILDE AND DIAERESIS
    ('\u{1e4f}', b"\xc8\xc4o"), // LATIN SMALL LETTER O WITH TILDE AND DIAERESIS
    ('\u{1e50}', b"\xc1\xc5O"), // LATIN CAPITAL LETTER O WITH MACRON AND GRAVE
    ('\u{1e51}', b"\xc1\xc5o"), // LATIN SMALL LETTER O WITH MACRON AND GRAVE
    ('\u{1e52}', b"\xc2\xc5O"), // LATIN CAPITAL LETTER O WITH MACRON AND ACUTE
    ('\u{1e53}', b"\xc2\xc5o"), // LATIN SMALL LETTER O WITH MACRON AND ACUTE
    ('\u{1e54}', b"\xc2P"), // LATIN CAPITAL LETTER P WITH ACUTE
    ('\u{1e55}', b"\xc2p"), // LATIN SMALL LETTER P WITH ACUTE
    ('\u{1e56}', b"\xc7P"), // LATIN CAPITAL LETTER P WITH DOT ABOVE
    ('\u{1e57}', b"\xc7p"), // LATIN SMALL LETTER P WITH DOT ABOVE
    ('\u{1e58}', b"\xc7R"), // LATIN CAPITAL LETTER R WITH DOT ABOVE
    ('\u{1e59}', b"\xc7r"), // LATIN SMALL LETTER R WITH DOT ABOVE
    ('\u{1e5a}', b"\xd6R"), // LATIN CAPITAL LETTER R WITH DOT BELOW
    ('\u{1e5b}', b"\xd6r"), // LATIN SMALL LETTER R WITH DOT BELOW
    ('\u{1e5c}', b"\xc5\xd6R"), // LATIN CAPITAL LETTER R WITH DOT BELOW AND MACRON
    ('\u{1e5d}', b"\xc5\xd6r"), // LATIN SMALL LETTER R WITH DOT BELOW AND MACRON
    ('\u{1e60}', b"\xc7S"), // LATIN CAPITAL LETTER S WITH DOT ABOVE
    ('\u{1e61}', b"\xc7s"), // LATIN SMALL LETTER S WITH DOT ABOVE
    ('\u{1e62}', b"\xd6S"), // LATIN CAPITAL LETTER S WITH DOT BELOW
    ('\u{1e63}', b"\xd6s"), // LATIN SMALL LETTER S WITH DOT BELOW
    ('\u{1e64}', b"\xc7\xc2S"), // LATIN CAPITAL LETTER S WITH ACUTE AND DOT ABOVE
    ('\u{1e65}', b"\xc7\xc2s"), // LATIN SMALL LETTER S WITH ACUTE AND DOT ABOVE
    ('\u{1e66}', b"\xc7\xcfS"), // LATIN CAPITAL LETTER S WITH CARON AND DOT ABOVE
    ('\u{1e67}', b"\xc7\xcfs"), // LATIN SMALL LETTER S WITH CARON AND DOT ABOVE
    ('\u{1e68}', b"\xc7\xd6S"), // LATIN CAPITAL LETTER S WITH DOT BELOW AND DOT ABOVE
    ('\u{1e69}', b"\xc7\xd6s"), // LATIN SMALL LETTER S WITH DOT BELOW AND DOT ABOVE
    ('\u{1e6a}', b"\xc7T"), // LATIN CAPITAL LETTER T WITH DOT ABOVE
    ('\u{1e6b}', b"\xc7t"), // LATIN SMALL LETTER T WITH DOT ABOVE
    ('\u{1e6c}', b"\xd6T"), // LATIN CAPITAL LETTER T WITH DOT BELOW
    ('\u{1e6d}', b"\xd6t"), // LATIN SMALL LETTER T WITH DOT BELOW
    ('\u{1e70}', b"\xdbT"), // LATIN CAPITAL LETTER T WITH CIRCUMFLEX BELOW
    ('\u{1e71}', b"\xdbt"), // LATIN SMALL LETTER T WITH CIRCUMFLEX BELOW
    ('\u{1e72}', b"\xd7U"), // LATIN CAPITAL LETTER U WITH DIAERESIS BELOW
    ('\u{1e73}', b"\xd7u"), // LATIN SMALL LETTER U WITH DIAERESIS BELOW
    ('\u{1e76}', b"\xdbU"), // LATIN CAPITAL LETTER U WITH CIRCUMFLEX BELOW
    ('\u{1e77}', b"\xdbu"), // LATIN SMALL LETTER U WITH CIRCUMFLEX BELOW
    ('\u{1e78}', b"\xc2\xc4U"), // LATIN CAPITAL LETTER U WITH TILDE AND ACUTE
    ('\u{1e79}', b"\xc2\xc4u"), // LATIN SMALL LETTER U WITH TILDE AND ACUTE
    ('\u{1e7a}', b"\xc8\xc5U"), // LATIN CAPITAL LETTER U WITH MACRON AND DIAERESIS
    ('\u{1e7b}', b"\xc8\xc5u"), // LATIN SMALL LETTER U WITH MACRON AND DIAERESIS
    ('\u{1e7c}', b"\xc4V"), // LATIN CAPITAL LETTER V WITH TILDE
    ('\u{1e7d}', b"\xc4v"), // LATIN SMALL LETTER V WITH TILDE
    ('\u{1e7e}', b"\xd6V"), // LATIN CAPITAL LETTER V WITH DOT BELOW
    ('\u{1e7f}', b"\xd6v"), // LATIN SMALL LETTER V WITH DOT BELOW
    ('\u{1e80}', b"\xc1W"), // LATIN CAPITAL LETTER W WITH GRAVE
    ('\u{1e81}', b"\xc1w"), // LATIN SMALL LETTER W WITH GRAVE
    ('\u{1e82}', b"\xc2W"), // LATIN CAPITAL LETTER W WITH ACUTE
    ('\u{1e83}', b"\xc2w"), // LATIN SMALL LETTER W WITH ACUTE
    ('\u{1e84}', b"\xc8W"), // LATIN CAPITAL LETTER W WITH DIAERESIS
    ('\u{1e85}', b"\xc8w"), // LATIN SMALL LETTER W WITH DIAERESIS
    ('\u{1e86}', b"\xc7W"), // LATIN CAPITAL LETTER W WITH DOT ABOVE
    ('\u{1e87}', b"\xc7w"), // LATIN SMALL LETTER W WITH DOT ABOVE
    ('\u{1e88}', b"\xd6W"), // LATIN CAPITAL LETTER W WITH DOT BELOW
    ('\u{1e89}', b"\xd6w"), // LATIN SMALL LETTER W WITH DOT BELOW
    ('\u{1e8a}', b"\xc7X"), // LATIN CAPITAL LETTER X WITH DOT ABOVE
    ('\u{1e8b}', b"\xc7x"), // LATIN SMALL LETTER X WITH DOT ABOVE
    ('\u{1e8c}', b"\xc8X"), // LATIN CAPITAL LETTER X WITH DIAERESIS
    ('\u{1e8d}', b"\xc8x"), // LATIN SMALL LETTER X WITH DIAERESIS
    ('\u{1e8e}', b"\xc7Y"), // LATIN CAPITAL LETTER Y WITH DOT ABOVE
    ('\u{1e8f}', b"\xc7y"), // LATIN SMALL LETTER Y WITH DOT ABOVE
    ('\u{1e90}', b"\xc3Z"), // LATIN CAPITAL LETTER Z WITH CIRCUMFLEX
    ('\u{1e91}', b"\xc3z"), // LATIN SMALL LETTER Z WITH CIRCUMFLEX
    ('\u{1e92}', b"\xd6Z"), // LATIN CAPITAL LETTER Z WITH DOT BELOW
    ('\u{1e93}', b"\xd6z"), // LATIN SMALL LETTER Z WITH DOT BELOW
    ('\u{1e97}', b"\xc8t"), // LATIN SMALL LETTER T WITH DIAERESIS
    ('\u{1e98}', b"\xcaw"), // LATIN SMALL LETTER W WITH RING ABOVE
    ('\u{1e99}', b"\xcay"), // LATIN SMALL LETTER Y WITH RING ABOVE
    ('\u{1ea0}', b"\xd6A"), // LATIN CAPITAL LETTER A WITH DOT BELOW
    ('\u{1ea1}', b"\xd6a"), // LATIN SMALL LETTER A WITH DOT BELOW
    ('\u{1ea2}', b"\xc0A"), // LATIN CAPITAL LETTER A WITH HOOK ABOVE
    ('\u{1ea3}', b"\xc0a"), // LATIN SMALL LETTER A WITH HOOK ABOVE
    ('\u{1ea4}', b"\xc2\xc3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND ACUTE
    ('\u{1ea5}', b"\xc2\xc3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND ACUTE
    ('\u{1ea6}', b"\xc1\xc3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND GRAVE
    ('\u{1ea7}', b"\xc1\xc3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND GRAVE
    ('\u{1ea8}', b"\xc0\xc3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ea9}', b"\xc0\xc3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1eaa}', b"\xc4\xc3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND TILDE
    ('\u{1eab}', b"\xc4\xc3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND TILDE
    ('\u{1eac}', b"\xc3\xd6A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ead}', b"\xc3\xd6a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1eae}', b"\xc2\xc6A"), // LATIN CAPITAL LETTER A WITH BREVE AND ACUTE
    ('\u{1eaf}', b"\xc2\xc6a"), // LATIN SMALL LETTER A WITH BREVE AND ACUTE
    ('\u{1eb0}', b"\xc1\xc6A"), // LATIN CAPITAL LETTER A WITH BREVE AND GRAVE
    ('\u{1eb1}', b"\xc1\xc6a"), // LATIN SMALL LETTER A WITH BREVE AND GRAVE
    ('\u{1eb2}', b"\xc0\xc6A"), // LATIN CAPITAL LETTER A WITH BREVE AND HOOK ABOVE
    ('\u{1eb3}', b"\xc0\xc6a"), // LATIN SMALL LETTER A WITH BREVE AND HOOK ABOVE
    ('\u{1eb4}', b"\xc4\xc6A"), // LATIN CAPITAL LETTER A WITH BREVE AND TILDE
    ('\u{1eb5}', b"\xc4\xc6a"), // LATIN SMALL LETTER A WITH BREVE AND TILDE
    ('\u{1eb6}', b"\xc6\xd6A"), // LATIN CAPITAL LETTER A WITH BREVE AND DOT BELOW
    ('\u{1eb7}', b"\xc6\xd6a"), // LATIN SMALL LETTER A WITH BREVE AND DOT BELOW
    ('\u{1eb8}', b"\xd6E"), // LATIN CAPITAL LETTER E WITH DOT BELOW
    ('\u{1eb9}', b"\xd6e"), // LATIN SMALL LETTER E WITH DOT BELOW
    ('\u{1eba}', b"\xc0E"), // LATIN CAPITAL LETTER E WITH HOOK ABOVE
    ('\u{1ebb}', b"\xc0e"), // LATIN SMALL LETTER E WITH HOOK ABOVE
    ('\u{1ebc}', b"\xc4E"), // LATIN CAPITAL LETTER E WITH TILDE
    ('\u{1ebd}', b"\xc4e"), // LATIN SMALL LETTER E WITH TILDE
    ('\u{1ebe}', b"\xc2\xc3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND ACUTE
    ('\u{1ebf}', b"\xc2\xc3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND ACUTE
    ('\u{1ec0}', b"\xc1\xc3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND GRAVE
    ('\u{1ec1}', b"\xc1\xc3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND GRAVE
    ('\u{1ec2}', b"\xc0\xc3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ec3}', b"\xc0\xc3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ec4}', b"\xc4\xc3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND TILDE
    ('\u{1ec5}', b"\xc4\xc3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND TILDE
    ('\u{1ec6}', b"\xc3\xd6E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ec7}', b"\xc3\xd6e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ec8}', b"\xc0I"), // LATIN CAPITAL LETTER I WITH HOOK ABOVE
    ('\u{1ec9}', b"\xc0i"), // LATIN SMALL LETTER I WITH HOOK ABOVE
    ('\u{1eca}', b"\xd6I"), // LATIN CAPITAL LETTER I WITH DOT BELOW
    ('\u{1ecb}', b"\xd6i"), // LATIN SMALL LETTER I WITH DOT BELOW
    ('\u{1ecc}', b"\xd6O"), // LATIN CAPITAL LETTER O WITH DOT BELOW
    ('\u{1ecd}', b"\xd6o"), // LATIN SMALL LETTER O WITH DOT BELOW
    ('\u{1ece}', b"\xc0O"), // LATIN CAPITAL LETTER O WITH HOOK ABOVE
    ('\u{1ecf}', b"\xc0o"), // LATIN SMALL LETTER O WITH HOOK ABOVE
    ('\u{1ed0}', b"\xc2\xc3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND ACUTE
    ('\u{1ed1}', b"\xc2\xc3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND ACUTE
    ('\u{1ed2}', b"\xc1\xc3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND GRAVE
    ('\u{1ed3}', b"\xc1\xc3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND GRAVE
    ('\u{1ed4}', b"\xc0\xc3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ed5}', b"\xc0\xc3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ed6}', b"\xc4\xc3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND TILDE
    ('\u{1ed7}', b"\xc4\xc3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND TILDE
    ('\u{1ed8}', b"\xc3\xd6O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ed9}', b"\xc3\xd6o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1eda}', b"\xc2\xceO"), // LATIN CAPITAL LETTER O WITH HORN AND ACUTE
    ('\u{1edb}', b"\xc2\xceo"), // LATIN SMALL LETTER O WITH HORN AND ACUTE
    ('\u{1edc}', b"\xc1\xceO"), // LATIN CAPITAL LETTER O WITH HORN AND GRAVE
    ('\u{1edd}', b"\xc1\xceo"), // LATIN SMALL LETTER O WITH HORN AND GRAVE
    ('\u{1ede}', b"\xc0\xceO"), // LATIN CAPITAL LETTER O WITH HORN AND HOOK ABOVE
    ('\u{1edf}', b"\xc0\xceo"), // LATIN SMALL LETTER O WITH HORN AND HOOK ABOVE
    ('\u{1ee0}', b"\xc4\xceO"), // LATIN CAPITAL LETTER O WITH HORN AND TILDE
    ('\u{1ee1}', b"\xc4\xceo"), // LATIN SMALL LETTER O WITH HORN AND TILDE
    ('\u{1ee2}', b"\xd6\xceO"), // LATIN CAPITAL LETTER O WITH HORN AND DOT BELOW
    ('\u{1ee3}', b"\xd6\xceo"), // LATIN SMALL LETTER O WITH HORN AND DOT BELOW
    ('\u{1ee4}', b"\xd6U"), // LATIN CAPITAL LETTER U WITH DOT BELOW
    ('\u{1ee5}', b"\xd6u"), // LATIN SMALL LETTER U WITH DOT BELOW
    ('\u{1ee6}', b"\xc0U"), // LATIN CAPITAL LETTER U WITH HOOK ABOVE
    ('\u{1ee7}', b"\xc0u"), // LATIN SMALL LETTER U WITH HOOK ABOVE
    ('\u{1ee8}', b"\xc2\xceU"), // LATIN CAPITAL LETTER U WITH HORN AND ACUTE
    ('\u{1ee9}', b"\xc2\xceu"), // LATIN SMALL LETTER U WITH HORN AND ACUTE
    ('\u{1eea}', b"\xc1\xceU"), // LATIN CAPITAL LETTER U WITH HORN AND GRAVE
    ('\u{1eeb}', b"\xc1\xceu"), // LATIN SMALL LETTER U WITH HORN AND GRAVE
    ('\u{1eec}', b"\xc0\xceU"), // LATIN CAPITAL LETTER U WITH HORN AND HOOK ABOVE
    ('\u{1eed}', b"\xc0\xceu"), // LATIN SMALL LETTER U WITH HORN AND HOOK ABOVE
    ('\u{1eee}', b"\xc4\xceU"), // LATIN CAPITAL LETTER U WITH HORN AND TILDE
    ('\u{1eef}', b"\xc4\xceu"), // LATIN SMALL LETTER U WITH HORN AND TILDE
    ('\u{1ef0}', b"\xd6\xceU"), // LATIN CAPITAL LETTER U WITH HORN AND DOT BELOW
    ('\u{1ef1}', b"\xd6\xceu"), // LATIN SMALL LETTER U WITH HORN AND DOT BELOW
    ('\u{1ef2}', b"\xc1Y"), // LATIN CAPITAL LETTER Y WITH GRAVE
    ('\u{1ef3}', b"\xc1y"), // LATIN SMALL LETTER Y WITH GRAVE
    ('\u{1ef4}', b"\xd6Y"), // LATIN CAPITAL LETTER Y WITH DOT BELOW
    ('\u{1ef5}', b"\xd6y"), // LATIN SMALL LETTER Y WITH DOT BELOW
    ('\u{1ef6}', b"\xc0Y"), // LATIN CAPITAL LETTER Y WITH HOOK ABOVE
    ('\u{1ef7}', b"\xc0y"), // LATIN SMALL LETTER Y WITH HOOK ABOVE
    ('\u{1ef8}', b"\xc4Y"), // LATIN CAPITAL LETTER Y WITH TILDE
    ('\u{1ef9}', b"\xc4y"), // LATIN SMALL LETTER Y WITH TILDE
    ('\u{1fef}', b"`"), // GREEK VARIA
    ('\u{2018}', b"\xa9"), // LEFT SINGLE QUOTATION MARK
    ('\u{2019}', b"\xb9"), // RIGHT SINGLE QUOTATION MARK
    ('\u{201a}', b"\xb2"), // SINGLE LOW-9 QUOTATION MARK
    ('\u{201c}', b"\xaa"), // LEFT DOUBLE QUOTATION MARK
    ('\u{201d}', b"\xba"), // RIGHT DOUBLE QUOTATION MARK
    ('\u{201e}', b"\xa2"), // DOUBLE LOW-9 QUOTATION MARK
    ('\u{2020}', b"\xa6"), // DAGGER
    ('\u{2021}', b"\xb6"), // DOUBLE DAGGER
    ('\u{2032}', b"\xa8"), // PRIME
    ('\u{2033}', b"\xb8"), // DOUBLE PRIME
    ('\u{2117}', b"\xae"), // SOUND RECORDING COPYRIGHT
    ('\u{212b}', b"\xcaA"), // ANGSTROM SIGN
    ('\u{266d}', b"\xac"), // MUSIC FLAT SIGN
    ('\u{266f}', b"\xbc"), // MUSIC SHARP SIGN
    ('\u{fe20}', b"\xdd"), // COMBINING LIGATURE LEFT HALF
    ('\u{fe21}', b"\xde"), // COMBINING LIGATURE RIGHT HALF
    ('\u{fe23}', b"\xdf"), // COMBINING DOUBLE TILDE RIGHT HALF
];
