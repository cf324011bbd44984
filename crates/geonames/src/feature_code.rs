//! The GeoNames feature-code table.
//!
//! Codes and descriptions follow <https://www.geonames.org/export/codes.html>,
//! grouped under their owning [`FeatureClass`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::enums::FeatureClass;

macro_rules! feature_codes {
    ($($class:ident { $($variant:ident = $code:literal, $description:literal;)* })*) => {
        /// A GeoNames feature code such as `PPLC` or `ADM1`.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub enum FeatureCode {
            $($(
                #[doc = $description]
                $variant,
            )*)*
        }

        impl FeatureCode {
            /// Every known code, in table order.
            pub const ALL: &'static [FeatureCode] = &[$($(FeatureCode::$variant,)*)*];

            /// The code as it appears in the export files.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($(FeatureCode::$variant => $code,)*)*
                }
            }

            /// Short English description.
            pub const fn description(self) -> &'static str {
                match self {
                    $($(FeatureCode::$variant => $description,)*)*
                }
            }

            /// The feature class this code belongs to.
            pub const fn class(self) -> FeatureClass {
                match self {
                    $($(FeatureCode::$variant => FeatureClass::$class,)*)*
                }
            }

            /// Looks up a code exactly as written in the export files.
            ///
            /// Returns `None` for empty or unknown codes; GeoNames adds codes over time.
            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $($($code => Some(FeatureCode::$variant),)*)*
                    _ => None,
                }
            }
        }
    };
}

feature_codes! {
    A {
        Adm1 = "ADM1", "first-order administrative division";
        Adm1h = "ADM1H", "historical first-order administrative division";
        Adm2 = "ADM2", "second-order administrative division";
        Adm2h = "ADM2H", "historical second-order administrative division";
        Adm3 = "ADM3", "third-order administrative division";
        Adm3h = "ADM3H", "historical third-order administrative division";
        Adm4 = "ADM4", "fourth-order administrative division";
        Adm4h = "ADM4H", "historical fourth-order administrative division";
        Adm5 = "ADM5", "fifth-order administrative division";
        Adm5h = "ADM5H", "historical fifth-order administrative division";
        Admd = "ADMD", "administrative division";
        Admdh = "ADMDH", "historical administrative division";
        Lter = "LTER", "leased area";
        Pcl = "PCL", "political entity";
        Pcld = "PCLD", "dependent political entity";
        Pclf = "PCLF", "freely associated state";
        Pclh = "PCLH", "historical political entity";
        Pcli = "PCLI", "independent political entity";
        Pclix = "PCLIX", "section of independent political entity";
        Pcls = "PCLS", "semi-independent political entity";
        Prsh = "PRSH", "parish";
        Terr = "TERR", "territory";
        Zn = "ZN", "zone";
        Znb = "ZNB", "buffer zone";
    }
    H {
        Airs = "AIRS", "seaplane landing area";
        Anch = "ANCH", "anchorage";
        Bay = "BAY", "bay";
        Bays = "BAYS", "bays";
        Bght = "BGHT", "bight(s)";
        Bnk = "BNK", "bank(s)";
        Bnkr = "BNKR", "stream bank";
        Bnkx = "BNKX", "section of bank";
        Bog = "BOG", "bog(s)";
        Capg = "CAPG", "icecap";
        Chn = "CHN", "channel";
        Chnl = "CHNL", "lake channel(s)";
        Chnm = "CHNM", "marine channel";
        Chnn = "CHNN", "navigation channel";
        Cnfl = "CNFL", "confluence";
        Cnl = "CNL", "canal";
        Cnla = "CNLA", "aqueduct";
        Cnlb = "CNLB", "canal bend";
        Cnld = "CNLD", "drainage canal";
        Cnli = "CNLI", "irrigation canal";
        Cnln = "CNLN", "navigation canal(s)";
        Cnlq = "CNLQ", "abandoned canal";
        Cnlsb = "CNLSB", "underground irrigation canal(s)";
        Cnlx = "CNLX", "section of canal";
        Cove = "COVE", "cove(s)";
        Crkt = "CRKT", "tidal creek(s)";
        Crnt = "CRNT", "current";
        Cutf = "CUTF", "cutoff";
        Dck = "DCK", "dock(s)";
        Dckb = "DCKB", "docking basin";
        Domg = "DOMG", "icecap dome";
        Dprg = "DPRG", "icecap depression";
        Dtch = "DTCH", "ditch";
        Dtchd = "DTCHD", "drainage ditch";
        Dtchi = "DTCHI", "irrigation ditch";
        Dtchm = "DTCHM", "ditch mouth(s)";
        Esty = "ESTY", "estuary";
        Fish = "FISH", "fishing area";
        Fjd = "FJD", "fjord";
        Fjds = "FJDS", "fjords";
        Flls = "FLLS", "waterfall(s)";
        Fllsx = "FLLSX", "section of waterfall(s)";
        Fltm = "FLTM", "mud flat(s)";
        Fltt = "FLTT", "tidal flat(s)";
        Glcr = "GLCR", "glacier(s)";
        Gulf = "GULF", "gulf";
        Gysr = "GYSR", "geyser";
        Hbr = "HBR", "harbor(s)";
        Hbrx = "HBRX", "section of harbor";
        Inlt = "INLT", "inlet";
        Inltq = "INLTQ", "former inlet";
        Lbed = "LBED", "lake bed(s)";
        Lgn = "LGN", "lagoon";
        Lgns = "LGNS", "lagoons";
        Lgnx = "LGNX", "section of lagoon";
        Lk = "LK", "lake";
        Lkc = "LKC", "crater lake";
        Lki = "LKI", "intermittent lake";
        Lkn = "LKN", "salt lake";
        Lkni = "LKNI", "intermittent salt lake";
        Lko = "LKO", "oxbow lake";
        Lkoi = "LKOI", "intermittent oxbow lake";
        Lks = "LKS", "lakes";
        Lksb = "LKSB", "underground lake";
        Lksc = "LKSC", "crater lakes";
        Lksi = "LKSI", "intermittent lakes";
        Lksn = "LKSN", "salt lakes";
        Lksni = "LKSNI", "intermittent salt lakes";
        Lkx = "LKX", "section of lake";
        Mfgn = "MFGN", "salt evaporation ponds";
        Mgv = "MGV", "mangrove swamp";
        Moor = "MOOR", "moor(s)";
        Mrsh = "MRSH", "marsh(es)";
        Mrshn = "MRSHN", "salt marsh";
        Nrws = "NRWS", "narrows";
        Ocn = "OCN", "ocean";
        Ovf = "OVF", "overfalls";
        Pnd = "PND", "pond";
        Pndi = "PNDI", "intermittent pond";
        Pndn = "PNDN", "salt pond";
        Pndni = "PNDNI", "intermittent salt pond(s)";
        Pnds = "PNDS", "ponds";
        Pndsf = "PNDSF", "fishponds";
        Pndsi = "PNDSI", "intermittent ponds";
        Pndsn = "PNDSN", "salt ponds";
        Pool = "POOL", "pool(s)";
        Pooli = "POOLI", "intermittent pool";
        Rch = "RCH", "reach";
        Rdgg = "RDGG", "icecap ridge";
        Rdst = "RDST", "roadstead";
        Rf = "RF", "reef(s)";
        Rfc = "RFC", "coral reef(s)";
        Rfx = "RFX", "section of reef";
        Rpds = "RPDS", "rapids";
        Rsv = "RSV", "reservoir(s)";
        Rsvi = "RSVI", "intermittent reservoir";
        Rsvt = "RSVT", "water tank";
        Rvn = "RVN", "ravine(s)";
        Sbkh = "SBKH", "sabkha(s)";
        Sd = "SD", "sound";
        Sea = "SEA", "sea";
        Shol = "SHOL", "shoal(s)";
        Sill = "SILL", "sill";
        Spng = "SPNG", "spring(s)";
        Spns = "SPNS", "sulphur spring(s)";
        Spnt = "SPNT", "hot spring(s)";
        Stm = "STM", "stream";
        Stma = "STMA", "anabranch";
        Stmb = "STMB", "stream bend";
        Stmc = "STMC", "canalized stream";
        Stmd = "STMD", "distributary(-ies)";
        Stmh = "STMH", "headwaters";
        Stmi = "STMI", "intermittent stream";
        Stmix = "STMIX", "section of intermittent stream";
        Stmm = "STMM", "stream mouth(s)";
        Stmq = "STMQ", "abandoned watercourse";
        Stms = "STMS", "streams";
        Stmsb = "STMSB", "lost river";
        Stmx = "STMX", "section of stream";
        Strt = "STRT", "strait";
        Swmp = "SWMP", "swamp";
        Sysi = "SYSI", "irrigation system";
        Tnlc = "TNLC", "canal tunnel";
        Wad = "WAD", "wadi";
        Wadb = "WADB", "wadi bend";
        Wadj = "WADJ", "wadi junction";
        Wadm = "WADM", "wadi mouth";
        Wads = "WADS", "wadies";
        Wadx = "WADX", "section of wadi";
        Whrl = "WHRL", "whirlpool";
        Wll = "WLL", "well";
        Wllq = "WLLQ", "abandoned well";
        Wlls = "WLLS", "wells";
        Wtld = "WTLD", "wetland";
        Wtldi = "WTLDI", "intermittent wetland";
        Wtrc = "WTRC", "watercourse";
        Wtrh = "WTRH", "waterhole(s)";
    }
    L {
        Agrc = "AGRC", "agricultural colony";
        Amus = "AMUS", "amusement park";
        Area = "AREA", "area";
        Bsnd = "BSND", "drainage basin";
        Bsnp = "BSNP", "petroleum basin";
        Btl = "BTL", "battlefield";
        Clg = "CLG", "clearing";
        Cmn = "CMN", "common";
        Cns = "CNS", "concession area";
        Colf = "COLF", "coalfield";
        Cont = "CONT", "continent";
        Cst = "CST", "coast";
        Ctrb = "CTRB", "business center";
        Devh = "DEVH", "housing development";
        Fld = "FLD", "field(s)";
        Fldi = "FLDI", "irrigated field(s)";
        Gasf = "GASF", "gasfield";
        Graz = "GRAZ", "grazing area";
        Gvl = "GVL", "gravel area";
        Inds = "INDS", "industrial area";
        Land = "LAND", "arctic land";
        Lcty = "LCTY", "locality";
        Milb = "MILB", "military base";
        Mna = "MNA", "mining area";
        Mva = "MVA", "maneuver area";
        Nvb = "NVB", "naval base";
        Oas = "OAS", "oasis(-es)";
        Oilf = "OILF", "oilfield";
        Peat = "PEAT", "peat cutting area";
        Prk = "PRK", "park";
        Prt = "PRT", "port";
        Qcks = "QCKS", "quicksand";
        Res = "RES", "reserve";
        Resa = "RESA", "agricultural reserve";
        Resf = "RESF", "forest reserve";
        Resh = "RESH", "hunting reserve";
        Resn = "RESN", "nature reserve";
        Resp = "RESP", "palm tree reserve";
        Resv = "RESV", "reservation";
        Resw = "RESW", "wildlife reserve";
        Rgn = "RGN", "region";
        Rgne = "RGNE", "economic region";
        Rgnh = "RGNH", "historical region";
        Rgnl = "RGNL", "lake region";
        Rnga = "RNGA", "artillery range";
        Salt = "SALT", "salt area";
        Snow = "SNOW", "snowfield";
        Trb = "TRB", "tribal area";
    }
    P {
        Ppl = "PPL", "populated place";
        Ppla = "PPLA", "seat of a first-order administrative division";
        Ppla2 = "PPLA2", "seat of a second-order administrative division";
        Ppla3 = "PPLA3", "seat of a third-order administrative division";
        Ppla4 = "PPLA4", "seat of a fourth-order administrative division";
        Ppla5 = "PPLA5", "seat of a fifth-order administrative division";
        Pplc = "PPLC", "capital of a political entity";
        Pplch = "PPLCH", "historical capital of a political entity";
        Pplf = "PPLF", "farm village";
        Pplg = "PPLG", "seat of government of a political entity";
        Pplh = "PPLH", "historical populated place";
        Ppll = "PPLL", "populated locality";
        Pplq = "PPLQ", "abandoned populated place";
        Pplr = "PPLR", "religious populated place";
        Ppls = "PPLS", "populated places";
        Pplw = "PPLW", "destroyed populated place";
        Pplx = "PPLX", "section of populated place";
        Stlmt = "STLMT", "israeli settlement";
    }
    R {
        Cswy = "CSWY", "causeway";
        Oilp = "OILP", "oil pipeline";
        Prmn = "PRMN", "promenade";
        Ptge = "PTGE", "portage";
        Rd = "RD", "road";
        Rda = "RDA", "ancient road";
        Rdb = "RDB", "road bend";
        Rdcut = "RDCUT", "road cut";
        Rdjct = "RDJCT", "road junction";
        Rjct = "RJCT", "railroad junction";
        Rr = "RR", "railroad";
        Rrq = "RRQ", "abandoned railroad";
        Rte = "RTE", "caravan route";
        Ryd = "RYD", "railroad yard";
        St = "ST", "street";
        Stkr = "STKR", "stock route";
        Tnl = "TNL", "tunnel";
        Tnln = "TNLN", "natural tunnel";
        Tnlrd = "TNLRD", "road tunnel";
        Tnlrr = "TNLRR", "railroad tunnel";
        Tnls = "TNLS", "tunnels";
        Trl = "TRL", "trail";
    }
    S {
        Admf = "ADMF", "administrative facility";
        Agrf = "AGRF", "agricultural facility";
        Airb = "AIRB", "airbase";
        Airf = "AIRF", "airfield";
        Airh = "AIRH", "heliport";
        Airp = "AIRP", "airport";
        Airq = "AIRQ", "abandoned airfield";
        Airt = "AIRT", "terminal";
        Amth = "AMTH", "amphitheater";
        Ans = "ANS", "archaeological/prehistoric site";
        Aqc = "AQC", "aquaculture facility";
        Arch = "ARCH", "arch";
        Archv = "ARCHV", "archive";
        Art = "ART", "piece of art";
        Astr = "ASTR", "astronomical station";
        Asyl = "ASYL", "asylum";
        Athf = "ATHF", "athletic field";
        Atm = "ATM", "automatic teller machine";
        Bank = "BANK", "bank";
        Bcn = "BCN", "beacon";
        Bdg = "BDG", "bridge";
        Bdgq = "BDGQ", "ruined bridge";
        Blda = "BLDA", "apartment building";
        Bldg = "BLDG", "building(s)";
        Bldo = "BLDO", "office building";
        Bp = "BP", "boundary marker";
        Brks = "BRKS", "barracks";
        Brkw = "BRKW", "breakwater";
        Bstn = "BSTN", "baling station";
        Btyd = "BTYD", "boatyard";
        Bur = "BUR", "burial cave(s)";
        Bustn = "BUSTN", "bus station";
        Bustp = "BUSTP", "bus stop";
        Carn = "CARN", "cairn";
        Cave = "CAVE", "cave(s)";
        Ch = "CH", "church";
        Cmp = "CMP", "camp(s)";
        Cmpl = "CMPL", "logging camp";
        Cmpla = "CMPLA", "labor camp";
        Cmpmn = "CMPMN", "mining camp";
        Cmpo = "CMPO", "oil camp";
        Cmpq = "CMPQ", "abandoned camp";
        Cmprf = "CMPRF", "refugee camp";
        Cmty = "CMTY", "cemetery";
        Comc = "COMC", "communication center";
        Crrl = "CRRL", "corral(s)";
        Csno = "CSNO", "casino";
        Cstl = "CSTL", "castle";
        Cstm = "CSTM", "customs house";
        Cthse = "CTHSE", "courthouse";
        Ctra = "CTRA", "atomic center";
        Ctrcm = "CTRCM", "community center";
        Ctrf = "CTRF", "facility center";
        Ctrm = "CTRM", "medical center";
        Ctrr = "CTRR", "religious center";
        Ctrs = "CTRS", "space center";
        Cvnt = "CVNT", "convent";
        Dam = "DAM", "dam";
        Damq = "DAMQ", "ruined dam";
        Damsb = "DAMSB", "sub-surface dam";
        Dary = "DARY", "dairy";
        Dckd = "DCKD", "dry dock";
        Dcky = "DCKY", "dockyard";
        Dike = "DIKE", "dike";
        Dip = "DIP", "diplomatic facility";
        Dpof = "DPOF", "fuel depot";
        Est = "EST", "estate(s)";
        Esto = "ESTO", "oil palm plantation";
        Estr = "ESTR", "rubber plantation";
        Estsg = "ESTSG", "sugar plantation";
        Estt = "ESTT", "tea plantation";
        Estx = "ESTX", "section of estate";
        Fcl = "FCL", "facility";
        Fndy = "FNDY", "foundry";
        Frm = "FRM", "farm";
        Frmq = "FRMQ", "abandoned farm";
        Frms = "FRMS", "farms";
        Frmt = "FRMT", "farmstead";
        Ft = "FT", "fort";
        Fy = "FY", "ferry";
        Fyt = "FYT", "ferry terminal";
        Gate = "GATE", "gate";
        Gdn = "GDN", "garden(s)";
        Ghat = "GHAT", "ghat";
        Ghse = "GHSE", "guest house";
        Gosp = "GOSP", "gas-oil separator plant";
        Govl = "GOVL", "local government office";
        Grve = "GRVE", "grave";
        Herm = "HERM", "hermitage";
        Hlt = "HLT", "halting place";
        Hmsd = "HMSD", "homestead";
        Hse = "HSE", "house(s)";
        Hsec = "HSEC", "country house";
        Hsp = "HSP", "hospital";
        Hspc = "HSPC", "clinic";
        Hspd = "HSPD", "dispensary";
        Hspl = "HSPL", "leprosarium";
        Hsts = "HSTS", "historical site";
        Htl = "HTL", "hotel";
        Hut = "HUT", "hut";
        Huts = "HUTS", "huts";
        Insm = "INSM", "military installation";
        Ittr = "ITTR", "research institute";
        Jty = "JTY", "jetty";
        Ldng = "LDNG", "landing";
        Lepc = "LEPC", "leper colony";
        Libr = "LIBR", "library";
        Lndf = "LNDF", "landfill";
        Lock = "LOCK", "lock(s)";
        Lthse = "LTHSE", "lighthouse";
        Mall = "MALL", "mall";
        Mar = "MAR", "marina";
        Mfg = "MFG", "factory";
        Mfgb = "MFGB", "brewery";
        Mfgc = "MFGC", "cannery";
        Mfgcu = "MFGCU", "copper works";
        Mfglm = "MFGLM", "limekiln";
        Mfgm = "MFGM", "munitions plant";
        Mfgph = "MFGPH", "phosphate works";
        Mfgq = "MFGQ", "abandoned factory";
        Mfgsg = "MFGSG", "sugar refinery";
        Mkt = "MKT", "market";
        Ml = "ML", "mill(s)";
        Mlm = "MLM", "ore treatment plant";
        Mlo = "MLO", "olive oil mill";
        Mlsg = "MLSG", "sugar mill";
        Mlsgq = "MLSGQ", "former sugar mill";
        Mlsw = "MLSW", "sawmill";
        Mlwnd = "MLWND", "windmill";
        Mlwtr = "MLWTR", "water mill";
        Mn = "MN", "mine(s)";
        Mnau = "MNAU", "gold mine(s)";
        Mnc = "MNC", "coal mine(s)";
        Mncr = "MNCR", "chrome mine(s)";
        Mncu = "MNCU", "copper mine(s)";
        Mnfe = "MNFE", "iron mine(s)";
        Mnmt = "MNMT", "monument";
        Mnn = "MNN", "salt mine(s)";
        Mnq = "MNQ", "abandoned mine";
        Mnqr = "MNQR", "quarry(-ies)";
        Mole = "MOLE", "mole";
        Msqe = "MSQE", "mosque";
        Mssn = "MSSN", "mission";
        Mssnq = "MSSNQ", "abandoned mission";
        Msty = "MSTY", "monastery";
        Mtro = "MTRO", "metro station";
        Mus = "MUS", "museum";
        Nov = "NOV", "novitiate";
        Nsy = "NSY", "nursery(-ies)";
        Obpt = "OBPT", "observation point";
        Obs = "OBS", "observatory";
        Obsr = "OBSR", "radio observatory";
        Oilj = "OILJ", "oil pipeline junction";
        Oilq = "OILQ", "abandoned oil well";
        Oilr = "OILR", "oil refinery";
        Oilt = "OILT", "tank farm";
        Oilw = "OILW", "oil well";
        Opra = "OPRA", "opera house";
        Pal = "PAL", "palace";
        Pgda = "PGDA", "pagoda";
        Pier = "PIER", "pier";
        Pklt = "PKLT", "parking lot";
        Pmpo = "PMPO", "oil pumping station";
        Pmpw = "PMPW", "water pumping station";
        Po = "PO", "post office";
        Pp = "PP", "police post";
        Ppq = "PPQ", "abandoned police post";
        Prkgt = "PRKGT", "park gate";
        Prkhq = "PRKHQ", "park headquarters";
        Prn = "PRN", "prison";
        Prnj = "PRNJ", "reformatory";
        Prnq = "PRNQ", "abandoned prison";
        Ps = "PS", "power station";
        Psh = "PSH", "hydroelectric power station";
        Psn = "PSN", "nuclear power station";
        Pstb = "PSTB", "border post";
        Pstc = "PSTC", "customs post";
        Pstp = "PSTP", "patrol post";
        Pyr = "PYR", "pyramid";
        Pyrs = "PYRS", "pyramids";
        Quay = "QUAY", "quay";
        Rdcr = "RDCR", "traffic circle";
        Rdin = "RDIN", "intersection";
        Recg = "RECG", "golf course";
        Recr = "RECR", "racetrack";
        Rest = "REST", "restaurant";
        Ret = "RET", "store";
        Rhse = "RHSE", "resthouse";
        Rkry = "RKRY", "rookery";
        Rlg = "RLG", "religious site";
        Rlgr = "RLGR", "retreat";
        Rnch = "RNCH", "ranch(es)";
        Rsd = "RSD", "railroad siding";
        Rsgnl = "RSGNL", "railroad signal";
        Rsrt = "RSRT", "resort";
        Rstn = "RSTN", "railroad station";
        Rstnq = "RSTNQ", "abandoned railroad station";
        Rstp = "RSTP", "railroad stop";
        Rstpq = "RSTPQ", "abandoned railroad stop";
        Ruin = "RUIN", "ruin(s)";
        Sch = "SCH", "school";
        Scha = "SCHA", "agricultural school";
        Schc = "SCHC", "college";
        Schl = "SCHL", "language school";
        Schm = "SCHM", "military school";
        Schn = "SCHN", "maritime school";
        Scht = "SCHT", "technical school";
        Secp = "SECP", "State Exam Prep Centre";
        Shpf = "SHPF", "sheepfold";
        Shrn = "SHRN", "shrine";
        Shse = "SHSE", "storehouse";
        Slce = "SLCE", "sluice";
        Sntr = "SNTR", "sanatorium";
        Spa = "SPA", "spa";
        Sply = "SPLY", "spillway";
        Sqr = "SQR", "square";
        Stbl = "STBL", "stable";
        Stdm = "STDM", "stadium";
        Stnb = "STNB", "scientific research base";
        Stnc = "STNC", "coast guard station";
        Stne = "STNE", "experiment station";
        Stnf = "STNF", "forest station";
        Stni = "STNI", "inspection station";
        Stnm = "STNM", "meteorological station";
        Stnr = "STNR", "radio station";
        Stns = "STNS", "satellite station";
        Stnw = "STNW", "whaling station";
        Stps = "STPS", "steps";
        Swt = "SWT", "sewage treatment plant";
        Syg = "SYG", "synagogue";
        Thtr = "THTR", "theater";
        Tmb = "TMB", "tomb(s)";
        Tmpl = "TMPL", "temple(s)";
        Tnkd = "TNKD", "cattle dipping tank";
        Toll = "TOLL", "toll gate/barrier";
        Towr = "TOWR", "tower";
        Tram = "TRAM", "tram";
        Trant = "TRANT", "transit terminal";
        Trig = "TRIG", "triangulation station";
        Trmo = "TRMO", "oil pipeline terminal";
        Two = "TWO", "temp work office";
        Unip = "UNIP", "university prep school";
        Univ = "UNIV", "university";
        Usge = "USGE", "united states government establishment";
        Vetf = "VETF", "veterinary facility";
        Wall = "WALL", "wall";
        Walla = "WALLA", "ancient wall";
        Weir = "WEIR", "weir(s)";
        Whrf = "WHRF", "wharf(-ves)";
        Wrck = "WRCK", "wreck";
        Wtrw = "WTRW", "waterworks";
        Znf = "ZNF", "free trade zone";
        Zoo = "ZOO", "zoo";
    }
    T {
        Asph = "ASPH", "asphalt lake";
        Atol = "ATOL", "atoll(s)";
        Bar = "BAR", "bar";
        Bch = "BCH", "beach";
        Bchs = "BCHS", "beaches";
        Bdld = "BDLD", "badlands";
        Bldr = "BLDR", "boulder field";
        Blhl = "BLHL", "blowhole(s)";
        Blow = "BLOW", "blowout(s)";
        Bnch = "BNCH", "bench";
        Bute = "BUTE", "butte(s)";
        Cape = "CAPE", "cape";
        Cft = "CFT", "cleft(s)";
        Clda = "CLDA", "caldera";
        Clf = "CLF", "cliff(s)";
        Cnyn = "CNYN", "canyon";
        Cone = "CONE", "cone(s)";
        Crdr = "CRDR", "corridor";
        Crq = "CRQ", "cirque";
        Crqs = "CRQS", "cirques";
        Crtr = "CRTR", "crater(s)";
        Cuet = "CUET", "cuesta(s)";
        Dlta = "DLTA", "delta";
        Dpr = "DPR", "depression(s)";
        Dsrt = "DSRT", "desert";
        Dune = "DUNE", "dune(s)";
        Dvd = "DVD", "divide";
        Erg = "ERG", "sandy desert";
        Fan = "FAN", "fan(s)";
        Ford = "FORD", "ford";
        Fsr = "FSR", "fissure";
        Gap = "GAP", "gap";
        Grge = "GRGE", "gorge(s)";
        Hdld = "HDLD", "headland";
        Hll = "HLL", "hill";
        Hlls = "HLLS", "hills";
        Hmck = "HMCK", "hammock(s)";
        Hmda = "HMDA", "rock desert";
        Intf = "INTF", "interfluve";
        Isl = "ISL", "island";
        Islet = "ISLET", "islet";
        Islf = "ISLF", "artificial island";
        Islm = "ISLM", "mangrove island";
        Isls = "ISLS", "islands";
        Islt = "ISLT", "land-tied island";
        Islx = "ISLX", "section of island";
        Isth = "ISTH", "isthmus";
        Krst = "KRST", "karst area";
        Lava = "LAVA", "lava area";
        Lev = "LEV", "levee";
        Mesa = "MESA", "mesa(s)";
        Mnd = "MND", "mound(s)";
        Mrn = "MRN", "moraine";
        Mt = "MT", "mountain";
        Mts = "MTS", "mountains";
        Nkm = "NKM", "meander neck";
        Ntk = "NTK", "nunatak";
        Ntks = "NTKS", "nunataks";
        Pan = "PAN", "pan";
        Pans = "PANS", "pans";
        Pass = "PASS", "pass";
        Pen = "PEN", "peninsula";
        Penx = "PENX", "section of peninsula";
        Pk = "PK", "peak";
        Pks = "PKS", "peaks";
        Plat = "PLAT", "plateau";
        Platx = "PLATX", "section of plateau";
        Pldr = "PLDR", "polder";
        Pln = "PLN", "plain(s)";
        Plnx = "PLNX", "section of plain";
        Prom = "PROM", "promontory(-ies)";
        Pt = "PT", "point";
        Pts = "PTS", "points";
        Rdgb = "RDGB", "beach ridge";
        Rdge = "RDGE", "ridge(s)";
        Reg = "REG", "stony desert";
        Rk = "RK", "rock";
        Rkfl = "RKFL", "rockfall";
        Rks = "RKS", "rocks";
        Sand = "SAND", "sand area";
        Sbed = "SBED", "dry stream bed";
        Scrp = "SCRP", "escarpment";
        Sdl = "SDL", "saddle";
        Shor = "SHOR", "shore";
        Sink = "SINK", "sinkhole";
        Slid = "SLID", "slide";
        Slp = "SLP", "slope(s)";
        Spit = "SPIT", "spit";
        Spur = "SPUR", "spur(s)";
        Tal = "TAL", "talus slope";
        Trgd = "TRGD", "interdune trough(s)";
        Trr = "TRR", "terrace";
        Upld = "UPLD", "upland";
        Val = "VAL", "valley";
        Valg = "VALG", "hanging valley";
        Vals = "VALS", "valleys";
        Valx = "VALX", "section of valley";
        Vlc = "VLC", "volcano";
    }
    U {
        Apnu = "APNU", "apron";
        Arcu = "ARCU", "arch";
        Arru = "ARRU", "arrugado";
        Bdlu = "BDLU", "borderland";
        Bksu = "BKSU", "banks";
        Bnku = "BNKU", "bank";
        Bsnu = "BSNU", "basin";
        Cdau = "CDAU", "cordillera";
        Cnsu = "CNSU", "canyons";
        Cnyu = "CNYU", "canyon";
        Crsu = "CRSU", "continental rise";
        Depu = "DEPU", "deep";
        Edgu = "EDGU", "shelf edge";
        Escu = "ESCU", "escarpment";
        Fanu = "FANU", "fan";
        Fltu = "FLTU", "flat";
        Frzu = "FRZU", "fracture zone";
        Furu = "FURU", "furrow";
        Gapu = "GAPU", "gap";
        Glyu = "GLYU", "gully";
        Hllu = "HLLU", "hill";
        Hlsu = "HLSU", "hills";
        Holu = "HOLU", "hole";
        Knlu = "KNLU", "knoll";
        Knsu = "KNSU", "knolls";
        Ldgu = "LDGU", "ledge";
        Levu = "LEVU", "levee";
        Mesu = "MESU", "mesa";
        Mndu = "MNDU", "mound";
        Motu = "MOTU", "moat";
        Mtu = "MTU", "mountain";
        Pksu = "PKSU", "peaks";
        Pku = "PKU", "peak";
        Plnu = "PLNU", "plain";
        Pltu = "PLTU", "plateau";
        Pnlu = "PNLU", "pinnacle";
        Prvu = "PRVU", "province";
        Rdgu = "RDGU", "ridge";
        Rdsu = "RDSU", "ridges";
        Rfsu = "RFSU", "reefs";
        Rfu = "RFU", "reef";
        Risu = "RISU", "rise";
        Scnu = "SCNU", "seachannel";
        Scsu = "SCSU", "seachannels";
        Sdlu = "SDLU", "saddle";
        Shfu = "SHFU", "shelf";
        Shlu = "SHLU", "shoal";
        Shsu = "SHSU", "shoals";
        Shvu = "SHVU", "shelf valley";
        Silu = "SILU", "sill";
        Slpu = "SLPU", "slope";
        Smsu = "SMSU", "seamounts";
        Smu = "SMU", "seamount";
        Spru = "SPRU", "spur";
        Teru = "TERU", "terrace";
        Tmsu = "TMSU", "tablemounts";
        Tmtu = "TMTU", "tablemount";
        Tngu = "TNGU", "tongue";
        Trgu = "TRGU", "trough";
        Trnu = "TRNU", "trench";
        Valu = "VALU", "valley";
        Vlsu = "VLSU", "valleys";
    }
    V {
        Bush = "BUSH", "bush(es)";
        Cult = "CULT", "cultivated area";
        Frst = "FRST", "forest(s)";
        Frstf = "FRSTF", "fossilized forest";
        Grove = "GROVE", "grove";
        Grsld = "GRSLD", "grassland";
        Grvc = "GRVC", "coconut grove";
        Grvo = "GRVO", "olive grove";
        Grvp = "GRVP", "palm grove";
        Grvpn = "GRVPN", "pine grove";
        Hth = "HTH", "heath";
        Mdw = "MDW", "meadow";
        Och = "OCH", "orchard(s)";
        Scrb = "SCRB", "scrubland";
        Tree = "TREE", "tree(s)";
        Tund = "TUND", "tundra";
        Vin = "VIN", "vineyard";
        Vins = "VINS", "vineyards";
    }
}

impl fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeatureCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_parses_back_to_itself() {
        for code in FeatureCode::ALL {
            assert_eq!(FeatureCode::parse(code.as_str()), Some(*code));
        }
        assert_eq!(FeatureCode::ALL.len(), 680);
    }

    #[test]
    fn codes_know_their_class() {
        assert_eq!(FeatureCode::Pplc.class(), FeatureClass::P);
        assert_eq!(FeatureCode::Adm1.class(), FeatureClass::A);
        assert_eq!(FeatureCode::Vins.class(), FeatureClass::V);
        assert_eq!(FeatureCode::Pplc.description(), "capital of a political entity");
    }

    #[test]
    fn unknown_and_empty_codes_are_absent() {
        assert_eq!(FeatureCode::parse(""), None);
        assert_eq!(FeatureCode::parse("ZZZZ"), None);
        assert_eq!(FeatureCode::parse("pplc"), None);
    }
}
